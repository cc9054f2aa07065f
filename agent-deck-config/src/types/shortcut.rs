//! Shortcut action types.

use std::fmt;

// ============================================================================
// Shortcut Actions
// ============================================================================

/// Grouping used by the shortcuts settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    /// Switching between top-level views
    Navigation,
    /// Toggling chrome such as the sidebar
    Ui,
    /// Commands that create or start something
    Action,
}

/// A named, user-invokable command that can carry a keyboard shortcut.
///
/// The set is closed: every action has exactly one binding string, either the
/// default from [`crate::defaults::shortcut`] or a user override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShortcutAction {
    Board,
    Agent,
    Spec,
    Context,
    Settings,
    Profiles,
    Terminal,
    ToggleSidebar,
    AddFeature,
    AddContextFile,
    StartNext,
    NewSession,
    OpenProject,
    ProjectPicker,
    CyclePrevProject,
    CycleNextProject,
    AddProfile,
    SplitTerminalRight,
    SplitTerminalDown,
    CloseTerminal,
}

impl ShortcutAction {
    /// Every action, in settings-panel order.
    pub const ALL: [ShortcutAction; 20] = [
        ShortcutAction::Board,
        ShortcutAction::Agent,
        ShortcutAction::Spec,
        ShortcutAction::Context,
        ShortcutAction::Settings,
        ShortcutAction::Profiles,
        ShortcutAction::Terminal,
        ShortcutAction::ToggleSidebar,
        ShortcutAction::AddFeature,
        ShortcutAction::AddContextFile,
        ShortcutAction::StartNext,
        ShortcutAction::NewSession,
        ShortcutAction::OpenProject,
        ShortcutAction::ProjectPicker,
        ShortcutAction::CyclePrevProject,
        ShortcutAction::CycleNextProject,
        ShortcutAction::AddProfile,
        ShortcutAction::SplitTerminalRight,
        ShortcutAction::SplitTerminalDown,
        ShortcutAction::CloseTerminal,
    ];

    /// Stable identifier used in the persisted table, e.g. `"addFeature"`.
    pub fn id(self) -> &'static str {
        match self {
            ShortcutAction::Board => "board",
            ShortcutAction::Agent => "agent",
            ShortcutAction::Spec => "spec",
            ShortcutAction::Context => "context",
            ShortcutAction::Settings => "settings",
            ShortcutAction::Profiles => "profiles",
            ShortcutAction::Terminal => "terminal",
            ShortcutAction::ToggleSidebar => "toggleSidebar",
            ShortcutAction::AddFeature => "addFeature",
            ShortcutAction::AddContextFile => "addContextFile",
            ShortcutAction::StartNext => "startNext",
            ShortcutAction::NewSession => "newSession",
            ShortcutAction::OpenProject => "openProject",
            ShortcutAction::ProjectPicker => "projectPicker",
            ShortcutAction::CyclePrevProject => "cyclePrevProject",
            ShortcutAction::CycleNextProject => "cycleNextProject",
            ShortcutAction::AddProfile => "addProfile",
            ShortcutAction::SplitTerminalRight => "splitTerminalRight",
            ShortcutAction::SplitTerminalDown => "splitTerminalDown",
            ShortcutAction::CloseTerminal => "closeTerminal",
        }
    }

    /// Look up an action by its persisted identifier (case-sensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    /// Human-readable label shown in the settings panel and conflict errors.
    pub fn label(self) -> &'static str {
        match self {
            ShortcutAction::Board => "Kanban Board",
            ShortcutAction::Agent => "Agent Runner",
            ShortcutAction::Spec => "Spec Editor",
            ShortcutAction::Context => "Context",
            ShortcutAction::Settings => "Settings",
            ShortcutAction::Profiles => "AI Profiles",
            ShortcutAction::Terminal => "Terminal",
            ShortcutAction::ToggleSidebar => "Toggle Sidebar",
            ShortcutAction::AddFeature => "Add Feature",
            ShortcutAction::AddContextFile => "Add Context File",
            ShortcutAction::StartNext => "Start Next",
            ShortcutAction::NewSession => "New Session",
            ShortcutAction::OpenProject => "Open Project",
            ShortcutAction::ProjectPicker => "Project Picker",
            ShortcutAction::CyclePrevProject => "Previous Project",
            ShortcutAction::CycleNextProject => "Next Project",
            ShortcutAction::AddProfile => "Add Profile",
            ShortcutAction::SplitTerminalRight => "Split Terminal Right",
            ShortcutAction::SplitTerminalDown => "Split Terminal Down",
            ShortcutAction::CloseTerminal => "Close Terminal",
        }
    }

    pub fn category(self) -> ShortcutCategory {
        match self {
            ShortcutAction::Board
            | ShortcutAction::Agent
            | ShortcutAction::Spec
            | ShortcutAction::Context
            | ShortcutAction::Settings
            | ShortcutAction::Profiles
            | ShortcutAction::Terminal => ShortcutCategory::Navigation,
            ShortcutAction::ToggleSidebar => ShortcutCategory::Ui,
            _ => ShortcutCategory::Action,
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
