pub(crate) mod compose;
pub(crate) mod error;
pub(crate) mod home;
pub(crate) mod picker;
pub(crate) mod result;
