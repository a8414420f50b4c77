//! Category registry for personal-context records
//!
//! This module provides the fixed mapping from logical category names to
//! the text files that back them, along with the natural-language
//! descriptions surfaced as tool metadata.
//!
//! The registry is pure configuration data: it is built once at startup,
//! never mutated by any operation, and produces no side effects.

/// A single category of personal-context information.
///
/// Each category maps one-to-one to a storage unit (a plain-text file)
/// and carries separate descriptions for its read and write operations.
#[derive(Debug, Clone)]
pub struct Category {
    /// Logical name, also the suffix of the `get_` / `update_` tool pair
    pub name: String,
    /// File name of the backing record inside the data directory
    pub storage_unit: String,
    /// Description surfaced on the `get_<name>` tool
    pub read_description: String,
    /// Description surfaced on the `update_<name>` tool
    pub write_description: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        storage_unit: impl Into<String>,
        read_description: impl Into<String>,
        write_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            storage_unit: storage_unit.into(),
            read_description: read_description.into(),
            write_description: write_description.into(),
        }
    }

    /// Tool name for reading this category (`get_<name>`).
    pub fn read_tool_name(&self) -> String {
        format!("get_{}", self.name)
    }

    /// Tool name for replacing this category's content (`update_<name>`).
    pub fn write_tool_name(&self) -> String {
        format!("update_{}", self.name)
    }
}

/// Registry mapping category names to their backing storage units.
///
/// The set of categories is fixed for the process lifetime. Lookup is
/// read-only; a referenced category missing from the registry is a
/// startup-time configuration fault, not a per-request condition.
///
/// # Example
///
/// ```
/// use whoami_core::CategoryRegistry;
///
/// let registry = CategoryRegistry::with_builtins();
/// let category = registry.get("basic_info").unwrap();
/// assert_eq!(category.storage_unit, "basic_info.txt");
/// ```
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Create a registry with the builtin personal-context categories.
    ///
    /// Registers, in order: `basic_info`, `professional_info`,
    /// `work_preferences`, `schedule_patterns`, `current_projects`,
    /// `technical_stack`, `goals_objectives`.
    pub fn with_builtins() -> Self {
        let categories = vec![
            Category::new(
                "basic_info",
                "basic_info.txt",
                "Get core identity information including name, contact details, location, \
                 demographics, and personal background. Use when you need to know who you're \
                 talking to, how to address them, or basic personal details.",
                "Update core identity information. Replaces the entire stored record with the \
                 provided text. Use when the user's name, contact details, location, or other \
                 basic personal details change.",
            ),
            Category::new(
                "professional_info",
                "professional.txt",
                "Get detailed professional information including current job, career history, \
                 skills, achievements, and team structure. Use when discussing work, career \
                 advice, professional topics, or understanding their expertise level.",
                "Update professional information. Replaces the entire stored record with the \
                 provided text. Use when job title, company, skills, or team structure change.",
            ),
            Category::new(
                "work_preferences",
                "preferences.txt",
                "Get communication style, work preferences, meeting style, and personal quirks. \
                 Use when planning interactions, scheduling meetings, or understanding how they \
                 like to work and communicate.",
                "Update work and communication preferences. Replaces the entire stored record \
                 with the provided text. Use when communication style, work style, or meeting \
                 preferences change.",
            ),
            Category::new(
                "schedule_patterns",
                "schedule_patterns.txt",
                "Get daily schedule, weekly patterns, regular meetings, and time preferences. \
                 Use when scheduling meetings, understanding availability, or planning \
                 time-sensitive discussions.",
                "Update schedule patterns. Replaces the entire stored record with the provided \
                 text. Use when the daily schedule, weekly patterns, or regular meetings change.",
            ),
            Category::new(
                "current_projects",
                "projects_current.txt",
                "Get active projects, responsibilities, deadlines, and team information. Use \
                 when discussing current work, understanding priorities, or coordinating on \
                 project-related topics.",
                "Update the list of active projects. Replaces the entire stored record with the \
                 provided text. Use when projects start, finish, or change status or deadlines.",
            ),
            Category::new(
                "technical_stack",
                "technical_stack.txt",
                "Get programming languages, frameworks, tools, and technical preferences. Use \
                 when discussing technical topics, code, tools, architecture decisions, or \
                 understanding their technical expertise.",
                "Update the technical stack. Replaces the entire stored record with the \
                 provided text. Use when languages, frameworks, tools, or platform preferences \
                 change.",
            ),
            Category::new(
                "goals_objectives",
                "objectives.txt",
                "Get short-term and long-term goals, objectives, KPIs, and career development \
                 plans. Use when discussing future plans, career growth, goal setting, or \
                 strategic planning conversations.",
                "Update goals and objectives. Replaces the entire stored record with the \
                 provided text. Use when quarterly goals, KPIs, or development priorities \
                 change.",
            ),
        ];
        Self { categories }
    }

    /// Look up a category by its logical name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All registered categories, in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
