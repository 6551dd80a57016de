//! Global CSS styles for HueKit.
//!
//! Injected once from the root component. Custom properties mirror the
//! constants in `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink-black: #101014;
  --ink-panel: #16161c;
  --ink-border: #26262e;

  /* BRASS (Titles, Focus) */
  --brass: #c2a24b;
  --brass-glow: rgba(194, 162, 75, 0.3);

  /* TEXT */
  --text-primary: #ececea;
  --text-secondary: rgba(236, 236, 234, 0.7);
  --text-muted: rgba(236, 236, 234, 0.45);

  /* SEMANTIC */
  --danger: #e5484d;
  --ok-green: #46a758;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--ink-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

/* === Studio Layout === */
.studio {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.studio-header {
  margin-bottom: 2rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--brass);
  letter-spacing: 0.02em;
}

.tagline {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-top: 0.25rem;
}

.studio-columns {
  display: flex;
  gap: 2rem;
  align-items: flex-start;
}

.picker-stack {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.slot-row {
  background: var(--ink-panel);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  padding: 1rem;
}

/* === Color Picker === */
.color-picker {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.picker-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.picker-row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.picker-swatch-input {
  width: 48px;
  height: 48px;
  padding: 0;
  border: 1px solid var(--ink-border);
  border-radius: 6px;
  background: none;
  cursor: pointer;
}

.picker-text-column {
  flex: 1;
}

.hex-input {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: var(--ink-black);
  border: 1px solid var(--ink-border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast);
}

.hex-input:focus {
  outline: none;
  border-color: var(--brass);
  box-shadow: 0 0 0 2px var(--brass-glow);
}

.hex-input.invalid {
  border-color: var(--danger);
}

.error-text {
  margin-top: 0.35rem;
  color: var(--danger);
  font-size: var(--text-xs);
}

.picker-preview {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.preview-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Swatch === */
.swatch {
  width: 28px;
  height: 28px;
  border: 1px solid var(--ink-border);
  border-radius: 6px;
}

.swatch.round {
  border-radius: 50%;
}

/* === Copy Button === */
.copy-button {
  margin-top: 0.75rem;
  padding: 0.35rem 0.9rem;
  background: none;
  border: 1px solid var(--ink-border);
  border-radius: 6px;
  color: var(--text-secondary);
  font-size: var(--text-xs);
  font-family: var(--font-mono);
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.copy-button:hover {
  border-color: var(--brass);
  color: var(--text-primary);
}

.copy-button.copied {
  border-color: var(--ok-green);
  color: var(--ok-green);
}

/* === Site Preview === */
.site-preview {
  flex: 1;
  border: 1px solid var(--ink-border);
  border-radius: 10px;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  transition: background-color var(--transition-normal);
}

.site-card {
  border-radius: 8px;
  padding: 1.5rem;
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

.site-heading {
  font-size: var(--text-lg);
  font-weight: 600;
}

.site-copy {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
}

.site-link {
  text-decoration: underline;
}

.site-button {
  margin-top: 1rem;
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 6px;
  font-size: var(--text-sm);
  font-weight: 500;
  cursor: pointer;
}

.preview-strip {
  display: flex;
  gap: 0.5rem;
}
"#;
