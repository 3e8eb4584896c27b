pub mod credit_controller;
