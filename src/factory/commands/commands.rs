use serde::de::DeserializeOwned;

use crate::domain::Action;
use crate::grid::Grid;

use super::Applier;

pub(super) fn apply<T: Clone>(applier: &mut Applier<T>, action: Option<Action<T>>) -> Grid<T> {
    if let Some(action) = action {
        apply_action(applier, action);
    }
    applier.grid.clone()
}

pub(super) fn apply_json<T: Clone + DeserializeOwned>(
    applier: &mut Applier<T>,
    json: Option<&str>,
) -> Grid<T> {
    let action = json.and_then(|json| match Action::from_json(json) {
        Ok(action) => Some(action),
        Err(err) => {
            log::warn!("ignoring malformed action: {}", err);
            None
        }
    });
    apply(applier, action)
}

fn apply_action<T: Clone>(applier: &mut Applier<T>, action: Action<T>) {
    let kind = action.kind();
    let applied = match action {
        Action::Clear { pos } => {
            let default_value = applier.config.default_value.clone();
            applier.grid.clear(pos, default_value)
        }
        Action::Set { pos, value } => applier.grid.set(pos, value),
        Action::Swap { from, to } => applier.grid.swap(from, to),
        Action::NoOp => return,
    };

    if !applied {
        log::debug!(
            "{} ignored: position outside {}x{} grid",
            kind,
            applier.grid.width(),
            applier.grid.height()
        );
    }
}
