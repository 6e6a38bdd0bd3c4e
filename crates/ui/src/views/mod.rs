mod form;
mod loader;
mod notice;
mod recommend;
mod result;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use form::FormPanel;
pub use loader::LoaderOverlay;
pub use notice::FailureDialog;
pub use recommend::RecommendView;
pub use result::ResultPreview;
