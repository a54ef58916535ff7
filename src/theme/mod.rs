//! Global CSS styles for the demo app.

pub const GLOBAL_STYLES: &str = r#"
:root {
  --bg: #0a0a0a;
  --border: #1a1a1a;
  --text: #f5f5f5;
  --text-muted: rgba(245, 245, 245, 0.5);
  --accent: #00d4aa;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
}

body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-mono);
}

.app {
  padding: 2rem;
}

.app__title {
  margin-bottom: 1rem;
}

.caption, .write-counter {
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

.gallery {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1rem;
}

.gallery__tile {
  border: 1px solid var(--border);
  background: none;
  padding: 0;
  cursor: pointer;
}

.gallery__tile--selected {
  border-color: var(--accent);
}

.rounded {
  border-radius: 12px;
}
"#;
