mod arrow;
mod spinner;

pub(crate) use arrow::ArrowIcon;
pub(crate) use spinner::Spinner;
