pub mod layout_builder;
