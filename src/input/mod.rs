use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Rect, TouchId, TouchPhase};

use crate::command::Command;

mod router;
pub use router::route_event;

/// Input events in canvas space.
///
/// Positions are logical coordinates relative to the canvas origin, no
/// matter whether they came from a mouse or a touch screen.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button or first finger went down on the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while pressed
    PointerMove { pos: Pos2 },
    /// Pointer released, or lost while pressed
    PointerUp { pos: Pos2 },
    /// A keyboard shortcut mapped to an action
    Shortcut(Command),
}

/// Turns raw egui events into `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    last_pointer_pos: Option<Pos2>,
    pointer_down: bool,
    active_touch: Option<TouchId>,
    /// Another layer (popup, window) lies over the canvas under the pointer
    canvas_covered: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update where the canvas sits on screen
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Presses are ignored while the canvas is covered by another layer
    pub fn set_canvas_covered(&mut self, covered: bool) {
        self.canvas_covered = covered;
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        match self.canvas_rect {
            Some(rect) => (pos - rect.min).to_pos2(),
            None => pos,
        }
    }

    fn is_on_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let allow_shortcuts = !ctx.wants_keyboard_input();
        ctx.input(|input| self.process_events(&input.events, allow_shortcuts))
    }

    /// Process a batch of raw events.
    ///
    /// Backends that synthesize pointer events from touches report both; in
    /// that case the touch events of the batch are skipped.
    pub fn process_events(&mut self, events: &[Event], allow_shortcuts: bool) -> Vec<InputEvent> {
        let has_pointer_events = events
            .iter()
            .any(|event| matches!(event, Event::PointerMoved(_) | Event::PointerButton { .. }));

        let mut out = Vec::new();
        for event in events {
            match event {
                Event::PointerMoved(pos) => {
                    self.last_pointer_pos = Some(*pos);
                    if self.pointer_down {
                        out.push(InputEvent::PointerMove { pos: self.to_canvas(*pos) });
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    if *pressed {
                        self.press(*pos, &mut out);
                    } else {
                        self.release(*pos, &mut out);
                    }
                }
                Event::PointerGone => {
                    if let Some(pos) = self.last_pointer_pos.take() {
                        self.release(pos, &mut out);
                    }
                    self.pointer_down = false;
                    self.active_touch = None;
                }
                Event::Touch { id, phase, pos, .. } if !has_pointer_events => {
                    self.touch(*id, *phase, *pos, &mut out);
                }
                Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if allow_shortcuts => {
                    if let Some(command) = shortcut(*key, *modifiers) {
                        out.push(InputEvent::Shortcut(command));
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn press(&mut self, pos: Pos2, out: &mut Vec<InputEvent>) {
        if self.pointer_down || self.canvas_covered || !self.is_on_canvas(pos) {
            return;
        }
        self.pointer_down = true;
        out.push(InputEvent::PointerDown { pos: self.to_canvas(pos) });
    }

    fn release(&mut self, pos: Pos2, out: &mut Vec<InputEvent>) {
        if !self.pointer_down {
            return;
        }
        self.pointer_down = false;
        out.push(InputEvent::PointerUp { pos: self.to_canvas(pos) });
    }

    fn touch(&mut self, id: TouchId, phase: TouchPhase, pos: Pos2, out: &mut Vec<InputEvent>) {
        match phase {
            TouchPhase::Start => {
                if self.active_touch.is_none() && !self.pointer_down {
                    self.press(pos, out);
                    if self.pointer_down {
                        self.active_touch = Some(id);
                        self.last_pointer_pos = Some(pos);
                    }
                }
            }
            TouchPhase::Move => {
                if self.active_touch == Some(id) {
                    self.last_pointer_pos = Some(pos);
                    out.push(InputEvent::PointerMove { pos: self.to_canvas(pos) });
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                    self.release(pos, out);
                }
            }
        }
    }
}

/// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo
pub fn shortcut(key: Key, modifiers: Modifiers) -> Option<Command> {
    if !modifiers.command {
        return None;
    }
    match key {
        Key::Z if modifiers.shift => Some(Command::Redo),
        Key::Z => Some(Command::Undo),
        Key::Y => Some(Command::Redo),
        _ => None,
    }
}
