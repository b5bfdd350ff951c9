use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    pub request: String,
    pub syntax: RefSyntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSyntax {
    /// `require('...')`
    Require,
    /// `import x from '...'` or `import '...'`
    Import,
    /// `include '...'`
    Include,
}

/// Project classification used to pick convention-based seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkTag {
    Angular,
    Vue,
    Express,
    Koa,
    Nest,
    React,
    None,
}

impl FrameworkTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkTag::Angular => "angular",
            FrameworkTag::Vue => "vue",
            FrameworkTag::Express => "express",
            FrameworkTag::Koa => "koa",
            FrameworkTag::Nest => "nestjs",
            FrameworkTag::React => "react",
            FrameworkTag::None => "none",
        }
    }
}

impl fmt::Display for FrameworkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
