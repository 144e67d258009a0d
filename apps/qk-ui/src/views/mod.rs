pub mod input_view;
pub mod notes_view;
pub mod plot_view;
