pub mod generate_order;
