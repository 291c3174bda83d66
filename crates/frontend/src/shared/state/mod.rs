pub mod cart_context;
