use crate::domains::diagnostics::{actions, data::AboutData};

pub fn about() -> AboutData {
    actions::about().into()
}
