pub mod chart_view;
pub mod form_view;
pub mod results_view;

pub use form_view::FormView;
pub use results_view::ResultsView;
