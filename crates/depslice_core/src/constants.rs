//! Default exclusion lists, suffixes and manifest names.
//!
//! These values seed [`SliceRules::default`](crate::SliceRules). Components never
//! read them directly; they receive a `SliceRules` value so a run can override
//! any list without touching global state.
//!
//! ## Ignored directories
//!
//! Build output, caches, VCS metadata and static asset folders. Matching against
//! these names is intentionally coarse (substring / prefix), see `SliceRules`.
//!
//! ## Extensions
//!
//! Extensions are stored with their leading dot and compared with `ends_with`.

/// Directory names excluded from traversal, seeding and the directory tree
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".cache",
    ".next",
    ".nuxt",
    ".vercel",
    ".firebase",
    "coverage",
    ".parcel-cache",
    ".expo",
    ".env",
    "tmp",
    "temp",
    "docs",
    "logs",
    "public",
    "static",
];

/// Binary and stylesheet extensions that never show up in the output
pub const IGNORED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", // images
    ".css", ".scss", ".less", ".sass", // stylesheets
];

/// Server-side template extensions (also tried, in order, when resolving)
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".ejs", ".pug", ".hbs", ".handlebars", ".html"];

/// First suffix tried for an extension-less reference
pub const SCRIPT_EXTENSION: &str = ".js";

/// Second suffix tried for an extension-less reference
pub const DATA_EXTENSION: &str = ".json";

pub const ANGULAR_MANIFEST: &str = "angular.json";
pub const VUE_CONFIG: &str = "vue.config.js";
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Package names looked up in `package.json` dependencies (in priority order)
pub const EXPRESS_PACKAGE: &str = "express";
pub const KOA_PACKAGE: &str = "koa";
pub const NEST_PACKAGE: &str = "@nestjs/core";
pub const REACT_PACKAGE: &str = "react";
