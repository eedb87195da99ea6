//! Reducer-style command dispatch
//!
//! Every inbound operation has a `Command` variant so a host can drive the
//! engine from a single queue of serialized messages.

use serde::Deserialize;
use crate::desktop::DesktopId;
use crate::error::Result;
use crate::geometry::ResizeDirection;
use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::{OpenRequest, WindowId};
use super::ShellEngine;

/// Inbound operation on the shell
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    Open(OpenRequest),
    Close { id: WindowId },
    Minimize { id: WindowId },
    ToggleMaximize { id: WindowId },
    Focus { id: WindowId },
    PointerDownInContent { id: WindowId },
    Mounted { id: WindowId },
    BeginDrag { id: WindowId, pointer: Vec2 },
    BeginResize { id: WindowId, direction: ResizeDirection, pointer: Vec2 },
    PointerMove { pointer: Vec2 },
    PointerUp,
    Cancel,
    SetViewport { width: f32, height: f32 },
    CreateDesktop { name: String },
    SwitchDesktop { id: DesktopId },
    RemoveDesktop { id: DesktopId },
    MoveToDesktop { id: WindowId, desktop_id: DesktopId },
    Tick,
}

impl Command {
    /// Decode a command from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ShellEngine {
    /// Apply one command at `now_ms`
    pub fn apply(&mut self, command: Command, now_ms: f64) -> InputResult {
        match command {
            Command::Open(request) => {
                self.open(request, now_ms);
                InputResult::Handled
            }
            Command::Close { id } => InputResult::from_handled(self.close(&id, now_ms)),
            Command::Minimize { id } => InputResult::from_handled(self.minimize(&id, now_ms)),
            Command::ToggleMaximize { id } => InputResult::from_handled(self.toggle_maximize(&id)),
            Command::Focus { id } => InputResult::from_handled(self.focus(&id, now_ms)),
            Command::PointerDownInContent { id } => {
                InputResult::from_handled(self.pointer_down_in_content(&id, now_ms))
            }
            Command::Mounted { id } => InputResult::from_handled(self.mounted(&id)),
            Command::BeginDrag { id, pointer } => self.begin_drag(&id, pointer),
            Command::BeginResize { id, direction, pointer } => self.begin_resize(&id, direction, pointer),
            Command::PointerMove { pointer } => self.handle_pointer_move(pointer),
            Command::PointerUp => self.handle_pointer_up(),
            Command::Cancel => self.cancel_interaction(),
            Command::SetViewport { width, height } => {
                self.set_viewport(width, height);
                InputResult::Handled
            }
            Command::CreateDesktop { name } => {
                self.create_desktop(&name);
                InputResult::Handled
            }
            Command::SwitchDesktop { id } => InputResult::from_handled(self.switch_desktop(id)),
            Command::RemoveDesktop { id } => InputResult::from_handled(self.remove_desktop(id)),
            Command::MoveToDesktop { id, desktop_id } => {
                InputResult::from_handled(self.move_to_desktop(&id, desktop_id))
            }
            Command::Tick => {
                let completions = self.tick(now_ms);
                InputResult::from_handled(!completions.is_empty())
            }
        }
    }
}
