//! Tests for InputState.

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec2;
    use crate::input::{InputState, KeySet, LogicalKey};

    #[test]
    fn test_no_keys_zero_intent() {
        let input = InputState::default();
        assert_eq!(input.movement_intent(), Vec2::ZERO);
        assert!(!input.run_held());
    }

    #[test]
    fn test_forward_is_negative_z() {
        let mut input = InputState::default();
        input.press(LogicalKey::Forward);
        assert_eq!(input.movement_intent(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.press(LogicalKey::Left);
        input.press(LogicalKey::Right);
        assert_eq!(input.movement_intent(), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut input = InputState::default();
        input.press(LogicalKey::Forward);
        input.press(LogicalKey::Right);

        let intent = input.movement_intent();
        assert!((intent.length() - 1.0).abs() < 1e-5, "length = {}", intent.length());
        assert!(intent.x > 0.0);
        assert!(intent.y < 0.0);
    }

    #[test]
    fn test_joystick_and_keyboard_combine() {
        let mut input = InputState::default();
        input.set_joystick(Vec2::new(0.0, -0.9));
        assert!(input.is_pressed(LogicalKey::Forward));
        assert!(!input.keyboard.forward);

        input.press(LogicalKey::Run);
        assert!(input.run_held());
        assert_eq!(input.movement_intent(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_joystick_dead_zone() {
        let keys = KeySet::from_stick(Vec2::new(0.2, -0.25), false);
        assert_eq!(keys, KeySet::default());

        let keys = KeySet::from_stick(Vec2::new(0.5, 0.31), false);
        assert!(keys.right);
        assert!(keys.backward);
        assert!(!keys.left);
        assert!(!keys.forward);
    }

    #[test]
    fn test_joystick_release_keeps_keyboard() {
        let mut input = InputState::default();
        input.press(LogicalKey::Left);
        input.set_joystick(Vec2::new(1.0, 0.0));
        input.release_joystick();

        assert!(input.is_pressed(LogicalKey::Left));
        assert!(!input.is_pressed(LogicalKey::Right));
    }

    #[test]
    fn test_release_all_clears_everything() {
        let mut input = InputState::default();
        input.press(LogicalKey::Forward);
        input.press(LogicalKey::Run);
        input.set_joystick(Vec2::new(-1.0, 0.0));
        input.pointer_down = true;

        input.release_all();

        assert_eq!(input, InputState::default());
        assert_eq!(input.movement_intent(), Vec2::ZERO);
    }
}
