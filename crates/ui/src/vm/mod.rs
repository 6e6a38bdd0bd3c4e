mod countries;
mod form_vm;
mod loader_vm;
mod markdown_vm;

pub use countries::COUNTRIES;
pub use form_vm::{FieldInput, FormVm, GENDER_OPTIONS, field_input};
pub use loader_vm::{LoaderVm, StageRowVm, StageStatus, map_loader};
pub use markdown_vm::{RESULT_TITLE, ResultVm, markdown_to_html, present_result, sanitize_html};
