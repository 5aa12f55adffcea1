//! Global CSS styles for the portfolio.
//!
//! Two themes selected by `.theme-dark` / `.theme-light` on the root element.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.theme-dark {
  --bg: #0e1014;
  --bg-raised: #171a21;
  --border: #262b36;
  --text-primary: #f2f4f8;
  --text-secondary: rgba(242, 244, 248, 0.7);
  --accent: #00a2ff;
  --accent-glow: rgba(0, 162, 255, 0.3);
  --overlay: rgba(0, 0, 0, 0.8);
}

.theme-light {
  --bg: #f6f7fb;
  --bg-raised: #ffffff;
  --border: #dde1ea;
  --text-primary: #16181d;
  --text-secondary: rgba(22, 24, 29, 0.7);
  --accent: #006ee6;
  --accent-glow: rgba(0, 110, 230, 0.25);
  --overlay: rgba(20, 22, 28, 0.6);
}

:root {
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --radius: 12px;
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
  font-family: var(--font-sans);
  line-height: 1.6;
}

body.modal-open {
  overflow: hidden;
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
}

.hidden {
  display: none !important;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  border-radius: 8px;
  padding: 0.5rem 1.1rem;
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fff;
}

.btn-primary:hover {
  box-shadow: 0 0 12px var(--accent-glow);
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-primary);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 100;
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
}

.nav-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.app-title {
  font-size: 1.25rem;
}

.nav-links {
  display: flex;
  gap: 1rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  padding: 0.25rem 0.5rem;
  border-bottom: 2px solid transparent;
}

.nav-link.active,
.nav-link:hover {
  color: var(--text-primary);
  border-bottom-color: var(--accent);
}

.nav-controls {
  display: flex;
  gap: 0.5rem;
}

.language-select,
.theme-toggle {
  background: var(--bg);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.3rem 0.6rem;
  font: inherit;
  text-transform: capitalize;
  cursor: pointer;
}

/* === Presence Avatar === */
.avatar-ring {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.avatar__img {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 3px solid #777;
  background: var(--bg);
  transition: border-color var(--transition-normal);
}

.avatar__img.loading {
  opacity: 0.6;
}

.avatar-ring__label {
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.avatar-offline .avatar__img { border-color: #777; }
.avatar-online .avatar__img { border-color: #00a2ff; }
.avatar-inGame .avatar__img { border-color: #02b757; }
.avatar-studio .avatar__img { border-color: #f68802; }
.avatar-invisible .avatar__img { border-color: #444; }

/* === Pages === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.page-title,
.section-header {
  font-size: 1.75rem;
  margin-bottom: 1rem;
}

.body-text {
  color: var(--text-secondary);
  max-width: 60ch;
}

.info-list {
  list-style: none;
  margin: 1.5rem 0;
}

.info-list__label {
  font-weight: 600;
}

.founder-link {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  color: var(--text-primary);
  padding: 0.5rem 1rem;
  font: inherit;
  cursor: pointer;
}

.founder-link img {
  width: 32px;
  height: 32px;
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
}

.card-grid--overflow {
  margin-top: 1.25rem;
}

.grid-toggle {
  display: block;
  margin: 1.25rem auto 0;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.grid-toggle:disabled {
  cursor: progress;
  opacity: 0.6;
}

.entity-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.entity-card:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px var(--accent-glow);
}

.entity-card__cover img {
  display: block;
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
}

.entity-card__body {
  padding: 0.9rem 1rem 1.1rem;
}

.entity-card__title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.entity-card__icon {
  width: 28px;
  height: 28px;
  border-radius: 6px;
}

.entity-card__preview {
  margin-top: 0.4rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.entity-card__buy {
  margin-top: 0.75rem;
}

/* === Modal Gallery === */
.gallery-root {
  outline: none;
}

.gallery-root--closing {
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
  transition: opacity var(--transition-normal), visibility 0s linear 300ms;
}

.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-overlay--confirm {
  z-index: 1100;
}

.gallery-modal,
.confirm-dialog {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.gallery-modal {
  width: min(900px, 100%);
  max-height: 100%;
  overflow-y: auto;
}

.confirm-dialog {
  width: min(380px, 100%);
}

.gallery-modal__header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.gallery-modal__icon {
  width: 40px;
  height: 40px;
  border-radius: 8px;
}

.gallery-modal__close {
  margin-left: auto;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.75rem;
  cursor: pointer;
}

.modal-title {
  font-size: 1.35rem;
}

.modal-description {
  margin-top: 1rem;
  color: var(--text-secondary);
  white-space: pre-line;
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

.carousel {
  position: relative;
}

.carousel__viewport {
  aspect-ratio: 16 / 9;
  background: #000;
  border-radius: 8px;
  overflow: hidden;
}

.carousel__media {
  width: 100%;
  height: 100%;
  object-fit: contain;
  border: none;
}

.carousel__nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.55);
  color: #fff;
  font-size: 1.5rem;
  cursor: pointer;
  z-index: 1;
}

.carousel__nav--prev { left: 0.5rem; }
.carousel__nav--next { right: 0.5rem; }

.carousel__counter {
  position: absolute;
  bottom: 0.5rem;
  right: 0.75rem;
  background: rgba(0, 0, 0, 0.55);
  color: #fff;
  font-size: 0.8rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
}

.carousel__thumbs {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.75rem;
  overflow-x: auto;
}

.carousel__thumb {
  flex: 0 0 auto;
  border: 2px solid transparent;
  border-radius: 6px;
  padding: 0;
  background: none;
  cursor: pointer;
  opacity: 0.6;
}

.carousel__thumb img {
  display: block;
  width: 96px;
  height: 54px;
  object-fit: cover;
  border-radius: 4px;
}

.carousel__thumb.active {
  border-color: var(--accent);
  opacity: 1;
}

[dir="rtl"] .carousel__nav--prev { left: auto; right: 0.5rem; }
[dir="rtl"] .carousel__nav--next { right: auto; left: 0.5rem; }
"#;
