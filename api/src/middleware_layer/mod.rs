pub mod cors_layer;
