use constcat::concat;

mod components;
mod home;
mod variables;

use components::BASE_COMPONENTS;
use variables::CSS_VARIABLES;

pub use home::HOME_STYLES;

// page shell: resets, header, sidebar, footer, and the back-to-top button
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

::selection {
  background-color: rgba(59, 130, 246, 0.3);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Page shell */
.page {
  min-height: 100vh;
  overflow-x: hidden;
}

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.load-error {
  max-width: 40rem;
  margin: var(--space-24) auto;
  padding: var(--space-6);
  border: 1px solid #EF4444;
  border-radius: var(--radius-lg);
  color: #EF4444;
  font-family: ui-monospace, monospace;
  white-space: pre-wrap;
}

/* Header */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--surface-glass);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo img {
  height: 2.5rem;
  width: auto;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.logo:hover img {
  transform: scale(1.05);
}

.nav-desktop {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  position: relative;
  padding: var(--space-2) 0;
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--text-secondary);
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-underline {
  position: absolute;
  left: 0;
  bottom: 0;
  height: 2px;
  width: 0;
  background-color: var(--primary);
  transition: width var(--transition-normal) var(--easing-standard);
}

.nav-link:hover .nav-underline,
.nav-underline.active {
  width: 100%;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding-left: var(--space-8);
  border-left: 1px solid var(--border);
}

.social-link {
  display: inline-flex;
  color: var(--text-tertiary);
  transition: color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.social-link:hover {
  transform: translateY(-2px);
}

.social-Linkedin:hover { color: #2563EB; }
.social-Instagram:hover { color: #EC4899; }
.social-Whatsapp:hover { color: #22C55E; }
.social-Github:hover { color: var(--text-primary); }

.theme-toggle {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--primary);
  transition: transform var(--transition-normal) var(--easing-standard);
}

:root.dark .theme-toggle {
  color: #FACC15;
}

.theme-toggle:hover {
  transform: scale(1.1);
}

.nav-mobile {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.menu-button {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  color: var(--text-primary);
}

@media (min-width: 768px) {
  .nav-desktop { display: flex; }
  .nav-mobile { display: none; }
}

/* Mobile sidebar */
.sidebar-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  background-color: var(--overlay);
  backdrop-filter: blur(4px);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.sidebar-overlay.open {
  opacity: 1;
  pointer-events: auto;
}

.sidebar {
  position: fixed;
  top: 0;
  right: 0;
  z-index: 70;
  height: 100%;
  width: var(--sidebar-width);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  transform: translateX(100%);
  transition: transform var(--transition-slow) var(--easing-standard);
}

.sidebar.open {
  transform: translateX(0);
}

.sidebar-content {
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: var(--space-6);
}

.sidebar-header {
  display: flex;
  justify-content: flex-end;
  margin-bottom: var(--space-8);
}

.sidebar-close {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
}

.sidebar-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.sidebar-link {
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--text-secondary);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.sidebar-link:hover {
  background-color: var(--surface-muted);
  color: var(--primary);
}

.sidebar-link.active {
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-glow);
}

.sidebar-footer {
  margin-top: auto;
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
}

.sidebar-caption {
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-tertiary);
  margin-bottom: var(--space-4);
}

.sidebar-socials {
  display: flex;
  gap: var(--space-6);
}

/* Footer */
.page-footer {
  padding: var(--space-12) 0;
  border-top: 1px solid var(--border);
  background-color: var(--surface-muted);
}

.footer-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  text-align: center;
}

.footer-line {
  font-weight: 500;
  color: var(--text-secondary);
}

.footer-rule {
  width: 3rem;
  height: 4px;
  border-radius: var(--radius-full);
  background-color: rgba(59, 130, 246, 0.2);
}

.footer-copy {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  z-index: 40;
  display: inline-flex;
  padding: var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-glow);
  opacity: 0;
  transform: translateY(40px);
  pointer-events: none;
  transition: opacity var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.back-to-top.visible {
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}

.back-to-top.visible:hover {
  transform: translateY(-4px) scale(1.1);
}

.back-to-top.launching {
  pointer-events: none;
  animation: launch 0.9s var(--easing-launch) forwards;
}
"#
);
