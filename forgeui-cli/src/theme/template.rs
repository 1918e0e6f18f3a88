//! Built-in theme template and the managed-section catalog

use super::block::extract_block;
use super::variables::{extract_variables, VariableMap};

/// Import lines every themed stylesheet must carry.
pub const REQUIRED_IMPORTS: [&str; 2] = ["@import \"tailwindcss\";", "@import \"tw-animate-css\";"];

/// The fixed reference stylesheet the merge is driven by.
///
/// Contains exactly one `:root` block and one `.dark` block (variable
/// defaults, merged with the user's values) plus one `@theme inline` block and
/// one `@layer base` block (engine-owned, replaced wholesale on every run).
pub const THEME_TEMPLATE: &str = r#"@theme inline {
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-card: var(--card);
  --color-card-foreground: var(--card-foreground);
  --color-popover: var(--popover);
  --color-popover-foreground: var(--popover-foreground);
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-muted: var(--muted);
  --color-muted-foreground: var(--muted-foreground);
  --color-accent: var(--accent);
  --color-accent-foreground: var(--accent-foreground);
  --color-destructive: var(--destructive);
  --color-border: var(--border);
  --color-input: var(--input);
  --color-ring: var(--ring);
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
  --radius-xl: calc(var(--radius) + 4px);
}

:root {
  --radius: 0.625rem;
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --card: oklch(1 0 0);
  --card-foreground: oklch(0.145 0 0);
  --popover: oklch(1 0 0);
  --popover-foreground: oklch(0.145 0 0);
  --primary: oklch(0.205 0 0);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.97 0 0);
  --secondary-foreground: oklch(0.205 0 0);
  --muted: oklch(0.97 0 0);
  --muted-foreground: oklch(0.556 0 0);
  --accent: oklch(0.97 0 0);
  --accent-foreground: oklch(0.205 0 0);
  --destructive: oklch(0.577 0.245 27.325);
  --border: oklch(0.922 0 0);
  --input: oklch(0.922 0 0);
  --ring: oklch(0.708 0 0);
}

.dark {
  --background: oklch(0.145 0 0);
  --foreground: oklch(0.985 0 0);
  --card: oklch(0.205 0 0);
  --card-foreground: oklch(0.985 0 0);
  --popover: oklch(0.205 0 0);
  --popover-foreground: oklch(0.985 0 0);
  --primary: oklch(0.922 0 0);
  --primary-foreground: oklch(0.205 0 0);
  --secondary: oklch(0.269 0 0);
  --secondary-foreground: oklch(0.985 0 0);
  --muted: oklch(0.269 0 0);
  --muted-foreground: oklch(0.708 0 0);
  --accent: oklch(0.269 0 0);
  --accent-foreground: oklch(0.985 0 0);
  --destructive: oklch(0.704 0.191 22.216);
  --border: oklch(1 0 0 / 10%);
  --input: oklch(1 0 0 / 15%);
  --ring: oklch(0.556 0 0);
}

@layer base {
  * {
    @apply border-border outline-ring/50;
  }

  body {
    @apply bg-background text-foreground;
  }
}
"#;

/// How a managed section is carried across a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Template and user variables are merged; the user's values win.
    MergeVariables,
    /// The template block replaces whatever the user had. These sections are
    /// engine-owned; edits inside them are not preserved.
    ReplaceFromTemplate,
}

/// The managed sections of a project stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `:root` default theme variables.
    RootVars,
    /// `.dark` dark-mode variable overrides.
    DarkVars,
    /// `@theme inline` mapping of theme variables to Tailwind color tokens.
    ThemeInline,
    /// `@layer base` element defaults.
    BaseLayer,
}

impl Section {
    /// All managed sections, in the order stale blocks are stripped.
    pub const ALL: [Self; 4] = [Self::RootVars, Self::DarkVars, Self::ThemeInline, Self::BaseLayer];

    /// The text used to locate this section's block in a stylesheet. Doubles
    /// as the selector when the section is re-rendered.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::RootVars => ":root",
            Self::DarkVars => ".dark",
            Self::ThemeInline => "@theme inline",
            Self::BaseLayer => "@layer base",
        }
    }

    /// Whether the section is merged variable-by-variable or replaced
    /// wholesale from the template.
    #[must_use]
    pub const fn strategy(self) -> MergeStrategy {
        match self {
            Self::RootVars | Self::DarkVars => MergeStrategy::MergeVariables,
            Self::ThemeInline | Self::BaseLayer => MergeStrategy::ReplaceFromTemplate,
        }
    }

    /// This section's block in the built-in template.
    #[must_use]
    pub fn template_block(self) -> &'static str {
        extract_block(THEME_TEMPLATE, self.keyword()).unwrap_or_default()
    }

    /// Variables the template declares for this section.
    #[must_use]
    pub fn template_variables(self) -> VariableMap {
        extract_variables(self.template_block())
    }
}
