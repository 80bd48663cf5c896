//! Keyboard input dispatch: overlays → global keys → controls.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sortviz_core::VisualizerError;

use crate::app::{viewport_units, AppState, ControlFocus, Overlay};
use crate::ui::widgets::slider::SliderInput;

/// Handle a key event at session time `now`.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Duration) -> Result<(), VisualizerError> {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return Ok(());
        }
        Overlay::Logs => {
            handle_log_overlay(app, key);
            return Ok(());
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return Ok(());
        }
        KeyCode::Char('L') => {
            app.overlay = Overlay::Logs;
            app.log_scroll = 0;
            return Ok(());
        }
        _ => {}
    }

    // 3. Playback and controls.
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => play_or_reset(app, now)?,
        KeyCode::Char('r') => {
            app.visualizer_mut()?.reset_array_and_animation(now);
            app.set_status("New array generated");
        }
        KeyCode::Char('a') => cycle_algorithm(app, true)?,
        KeyCode::Char('A') => cycle_algorithm(app, false)?,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('j') | KeyCode::Char('k')
        | KeyCode::Up | KeyCode::Down => {
            app.focus = app.focus.toggle();
        }
        KeyCode::Char('h') | KeyCode::Left => adjust(app, SliderInput::Decrease, now)?,
        KeyCode::Char('l') | KeyCode::Right => adjust(app, SliderInput::Increase, now)?,
        KeyCode::Home | KeyCode::Char('H') => adjust(app, SliderInput::Min, now)?,
        KeyCode::End => adjust(app, SliderInput::Max, now)?,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        _ => {}
    }
    Ok(())
}

/// Forward a terminal resize to the controller's debounced reset.
pub fn handle_resize(app: &mut AppState, rows: u16, now: Duration) -> Result<(), VisualizerError> {
    app.visualizer_mut()?.on_resize(viewport_units(rows), now);
    Ok(())
}

fn play_or_reset(app: &mut AppState, now: Duration) -> Result<(), VisualizerError> {
    let viz = app.visualizer_mut()?;
    if viz.requires_reset() {
        viz.reset_array_and_animation(now);
        app.set_status("New array generated");
    } else {
        let label = viz.selected_algorithm().label();
        let steps = viz.run_selected(now);
        app.set_status(format!("{label}: {steps} steps"));
    }
    Ok(())
}

fn cycle_algorithm(app: &mut AppState, forward: bool) -> Result<(), VisualizerError> {
    let viz = app.visualizer_mut()?;
    if viz.is_sorting() {
        app.set_warning("Algorithm is locked while sorting");
        return Ok(());
    }
    let current = viz.selected_algorithm();
    let next = if forward { current.next() } else { current.prev() };
    viz.set_selected_algorithm(next);
    app.set_status(format!("Algorithm: {}", next.label()));
    Ok(())
}

fn adjust(app: &mut AppState, input: SliderInput, now: Duration) -> Result<(), VisualizerError> {
    let focus = app.focus;
    let slider = focus.slider(app.visualizer()?);
    if slider.is_disabled() {
        app.set_warning("Controls are locked while sorting");
        return Ok(());
    }

    let mut changed = None;
    slider.handle(input, |value| changed = Some(value));
    let Some(value) = changed else {
        return Ok(());
    };

    let viz = app.visualizer_mut()?;
    match focus {
        ControlFocus::Speed => viz.set_animation_speed(value),
        ControlFocus::Bars => {
            // A new bar count always comes with a fresh dataset.
            viz.set_bar_count(value.round() as usize);
            viz.reset_array_and_animation(now);
        }
    }
    Ok(())
}

fn handle_log_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.log_scroll + 1 < app.log_history.len() {
                app.log_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.log_scroll = app.log_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use sortviz_core::{PlaybackState, SortingAlgorithm, Visualizer, VisualizerConfig};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mounted_app() -> AppState {
        let mut app = AppState::new(None);
        let mut viz = Visualizer::new(VisualizerConfig {
            seed: Some(17),
            ..VisualizerConfig::default()
        });
        viz.set_bar_count(10);
        viz.mount(800, ms(0));
        app.context.provide(viz);
        app
    }

    fn state(app: &AppState) -> PlaybackState {
        app.visualizer().unwrap().playback_state()
    }

    #[test]
    fn keys_without_provider_fail_fast() {
        let mut app = AppState::new(None);
        let err = handle_key(&mut app, press(KeyCode::Char('r')), ms(0)).unwrap_err();
        assert!(matches!(err, VisualizerError::OutsideProvider));
    }

    #[test]
    fn space_plays_then_resets() {
        let mut app = mounted_app();
        handle_key(&mut app, press(KeyCode::Char(' ')), ms(0)).unwrap();
        assert_eq!(state(&app), PlaybackState::Sorting);

        handle_key(&mut app, press(KeyCode::Char(' ')), ms(1)).unwrap();
        assert_eq!(state(&app), PlaybackState::Idle);
    }

    #[test]
    fn algorithm_cycles_but_locks_while_sorting() {
        let mut app = mounted_app();
        handle_key(&mut app, press(KeyCode::Char('a')), ms(0)).unwrap();
        assert_eq!(
            app.visualizer().unwrap().selected_algorithm(),
            SortingAlgorithm::Insertion
        );

        handle_key(&mut app, press(KeyCode::Enter), ms(0)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('A')), ms(0)).unwrap();
        assert_eq!(
            app.visualizer().unwrap().selected_algorithm(),
            SortingAlgorithm::Insertion
        );
    }

    #[test]
    fn speed_slider_adjusts_speed() {
        let mut app = mounted_app();
        assert_eq!(app.focus, ControlFocus::Speed);
        handle_key(&mut app, press(KeyCode::Char('h')), ms(0)).unwrap();
        assert_eq!(app.visualizer().unwrap().animation_speed(), 390.0);
        handle_key(&mut app, press(KeyCode::Home), ms(0)).unwrap();
        assert_eq!(app.visualizer().unwrap().animation_speed(), 100.0);
    }

    #[test]
    fn bar_slider_regenerates_dataset() {
        let mut app = mounted_app();
        let before = app.visualizer().unwrap().generation();
        handle_key(&mut app, press(KeyCode::Tab), ms(0)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('l')), ms(0)).unwrap();

        let viz = app.visualizer().unwrap();
        assert_eq!(viz.bar_count(), 15);
        assert_eq!(viz.dataset().len(), 15);
        assert_eq!(viz.generation(), before + 1);
    }

    #[test]
    fn sliders_refuse_input_while_sorting() {
        let mut app = mounted_app();
        handle_key(&mut app, press(KeyCode::Enter), ms(0)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('h')), ms(0)).unwrap();
        assert_eq!(app.visualizer().unwrap().animation_speed(), 400.0);
        assert!(app.status_message.as_ref().unwrap().0.contains("locked"));
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut app = mounted_app();
        handle_key(&mut app, press(KeyCode::Char('?')), ms(0)).unwrap();
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('q')), ms(0)).unwrap();
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn resize_is_debounced_through_tick() {
        let mut app = mounted_app();
        let before = app.visualizer().unwrap().generation();
        handle_resize(&mut app, 60, ms(0)).unwrap();
        handle_resize(&mut app, 61, ms(50)).unwrap();

        let viz = app.visualizer_mut().unwrap();
        viz.tick(ms(149));
        assert_eq!(viz.generation(), before);
        viz.tick(ms(150));
        assert_eq!(viz.generation(), before + 1);
        assert_eq!(viz.viewport_height(), 976);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = mounted_app();
        handle_key(&mut app, press(KeyCode::Char('q')), ms(0)).unwrap();
        assert!(!app.running);
    }
}
