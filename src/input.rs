use crate::rendering::PolygonMode;

/// The keys the scene reacts to, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub escape: bool,
    pub one: bool,
    pub two: bool,
}

impl KeyState {
    pub fn from_input(input: &egui::InputState) -> Self {
        return Self {
            escape: input.key_down(egui::Key::Escape),
            one: input.key_down(egui::Key::Num1),
            two: input.key_down(egui::Key::Num2),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    RequestClose,
    SetPolygonMode(PolygonMode),
}

/// Maps held keys to at most one action.
///
/// Priority is ESCAPE, then `1` (wireframe), then `2` (fill). Held keys fire
/// every frame; both actions are idempotent.
pub fn process_input(keys: KeyState) -> Option<InputAction> {
    if keys.escape {
        return Some(InputAction::RequestClose);
    } else if keys.one {
        return Some(InputAction::SetPolygonMode(PolygonMode::Line));
    } else if keys.two {
        return Some(InputAction::SetPolygonMode(PolygonMode::Fill));
    }
    return None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_no_action() {
        assert_eq!(process_input(KeyState::default()), None);
    }

    #[test]
    fn one_beats_two() {
        let keys = KeyState { escape: false, one: true, two: true };
        assert_eq!(process_input(keys), Some(InputAction::SetPolygonMode(PolygonMode::Line)));
    }

    #[test]
    fn escape_beats_everything() {
        let keys = KeyState { escape: true, one: true, two: true };
        assert_eq!(process_input(keys), Some(InputAction::RequestClose));
    }

    #[test]
    fn two_alone_fills() {
        let keys = KeyState { escape: false, one: false, two: true };
        assert_eq!(process_input(keys), Some(InputAction::SetPolygonMode(PolygonMode::Fill)));
    }
}
