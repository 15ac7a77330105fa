//! Logical sections of the navigation drawer and the static table that maps
//! view-model types onto them.

use std::fmt;

use super::view_model::ViewModelType;

/// Logical screen shown in the drawer's content area.
///
/// Adding a section: add a variant here + an entry in `SECTION_TABLE`.
/// The `as_str()` value is used as the persistence key — once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    EnterTime,
    CreateNewJob,
}

/// Static description of one section.
struct SectionDef {
    section: Section,
    /// Stable key for persistence and configuration.
    key: &'static str,
    menu_id: u32,
    /// Title shown when the section is displayed.
    title: &'static str,
    /// The single view-model type that lives in this section.
    view_model_type: &'static str,
}

const SECTION_TABLE: &[SectionDef] = &[
    SectionDef {
        section: Section::EnterTime,
        key: "enter_time",
        menu_id: 0,
        title: "Enter Time",
        view_model_type: "EnterTimeViewModel",
    },
    SectionDef {
        section: Section::CreateNewJob,
        key: "create_new_job",
        menu_id: 1,
        title: "Create New Job",
        view_model_type: "CreateNewJobViewModel",
    },
];

impl Section {
    /// All variants in default menu order.
    pub fn all() -> &'static [Section] {
        &[Self::EnterTime, Self::CreateNewJob]
    }

    fn def(&self) -> &'static SectionDef {
        match self {
            Self::EnterTime => &SECTION_TABLE[0],
            Self::CreateNewJob => &SECTION_TABLE[1],
        }
    }

    /// Stable key for persistence.
    pub fn as_str(&self) -> &'static str {
        self.def().key
    }

    /// Parse from a persistence key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        SECTION_TABLE.iter().find(|d| d.key == s).map(|d| d.section)
    }

    pub fn menu_id(&self) -> u32 {
        self.def().menu_id
    }

    pub fn default_title(&self) -> &'static str {
        self.def().title
    }

    /// The view-model type hosted by this section.
    pub fn view_model_type(&self) -> ViewModelType {
        ViewModelType::new(self.def().view_model_type)
    }

    /// Look up the section hosting a view-model type.
    ///
    /// Matching is exact on the type name.
    pub fn for_view_model(view_model_type: &ViewModelType) -> Option<Self> {
        SECTION_TABLE
            .iter()
            .find(|d| d.view_model_type == view_model_type.as_str())
            .map(|d| d.section)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
