pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-3);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
  border: none;
  outline: none;
  text-decoration: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:active {
  transform: scale(0.95);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-glow);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-lg {
  padding: var(--space-2) var(--space-2) var(--space-2) var(--space-8);
  font-size: 1.125rem;
}

.btn-bubble {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--text-inverse);
  color: var(--primary);
}

.btn:hover .nudge {
  transform: translateX(4px);
}

.nudge {
  transition: transform var(--transition-normal) var(--easing-standard);
}

.btn-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 600;
  color: var(--text-secondary);
  transition: color var(--transition-normal) var(--easing-standard);
}

.btn-link:hover,
.btn-link.primary {
  color: var(--primary);
  text-decoration: none;
}

.btn-link.primary:hover {
  gap: var(--space-3);
}

/* Cards */
.card {
  position: relative;
  background-color: var(--surface-muted);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard);
}

.card:hover {
  border-color: var(--primary);
  box-shadow: var(--shadow-lg);
}

.card.lift:hover {
  transform: translateY(-8px);
}

/* Pills and Tags */
.badge,
.pill {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--primary);
  background-color: rgba(59, 130, 246, 0.1);
  border: 1px solid rgba(59, 130, 246, 0.2);
}

.pill.accent {
  color: var(--accent);
  background-color: rgba(6, 182, 212, 0.1);
  border-color: rgba(6, 182, 212, 0.2);
}

.tag-caption {
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-tertiary);
  margin-bottom: var(--space-3);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.tag-list.end {
  justify-content: flex-end;
}

.tag {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-md);
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--text-secondary);
  background-color: var(--surface);
  border: 1px solid var(--border);
}

.tag.small {
  font-size: 10px;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--primary);
  background-color: rgba(59, 130, 246, 0.1);
  border-color: transparent;
}

/* Timeline */
.timeline-block {
  margin-top: var(--space-16);
}

.timeline-heading {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-8);
}

.timeline-bar {
  width: 8px;
  height: 32px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.timeline-bar.accent {
  background-color: var(--accent);
}

.timeline {
  position: relative;
  margin-left: var(--space-3);
  padding-left: var(--space-8);
  border-left: 2px solid var(--border);
  display: flex;
  flex-direction: column;
  gap: var(--space-10);
}

.timeline-item {
  position: relative;
}

.timeline-dot {
  position: absolute;
  left: calc(-1 * var(--space-8) - 9px);
  top: 0;
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  border: 4px solid var(--background);
  box-shadow: 0 0 0 4px rgba(59, 130, 246, 0.2);
}

.timeline-dot.accent {
  background-color: var(--accent);
  box-shadow: 0 0 0 4px rgba(6, 182, 212, 0.2);
}

.timeline-card {
  padding: var(--space-6);
}

.timeline-card-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.timeline-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.timeline-subtitle {
  color: var(--primary);
  font-weight: 500;
}

.timeline-meta {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: var(--space-1);
}

.timeline-status {
  font-size: 0.75rem;
  font-style: italic;
  color: var(--text-tertiary);
}

.timeline-tags {
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Motion */
@keyframes fade-left {
  from { opacity: 0; transform: translateX(-30px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes zoom-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes pulse {
  0%, 100% { opacity: 0.6; }
  50% { opacity: 0.3; }
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

@keyframes launch {
  0% { transform: translateY(0); opacity: 1; }
  20% { transform: translateY(6px); opacity: 1; }
  100% { transform: translateY(-120vh); opacity: 0; }
}

.fade-left { animation: fade-left 1s var(--easing-standard) both; }
.zoom-in { animation: zoom-in 1s var(--easing-standard) both; }
.rise { animation: rise 0.8s var(--easing-standard) both; }
.float { animation: float 6s ease-in-out infinite; }
.pulse { animation: pulse 3s ease-in-out infinite; }
.pulse.slow { animation-duration: 5s; }

.delay-1 { animation-delay: 200ms; }
.delay-2 { animation-delay: 400ms; }
.delay-3 { animation-delay: 600ms; }

@media (prefers-reduced-motion: reduce) {
  .fade-left, .zoom-in, .rise, .float, .pulse {
    animation: none;
  }
}
"#;
