pub const HOME_STYLES: &str = r#"
/* Portfolio Section Styles */

.section {
  position: relative;
  padding: var(--space-24) 0;
  scroll-margin-top: var(--header-height);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 800;
  margin-bottom: var(--space-6);
}

.section-blurb {
  color: var(--text-secondary);
  margin-bottom: var(--space-12);
}

.centered {
  text-align: center;
  margin-left: auto;
  margin-right: auto;
  max-width: 42rem;
}

.gradient-text {
  background-image: var(--gradient-title);
  background-size: 200% auto;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Hero */
.hero {
  min-height: 90vh;
  display: flex;
  align-items: center;
  padding-top: calc(var(--header-height) + var(--space-8));
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
  align-items: center;
  width: 100%;
}

.hero-content {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  text-align: center;
  align-items: center;
}

.hero .badge {
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.hero-greeting {
  font-size: 1.5rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.hero-title {
  font-size: 3rem;
  font-weight: 900;
  line-height: 1.1;
  letter-spacing: -0.02em;
}

.hero-roles {
  min-height: 2.5rem;
  font-size: 1.5rem;
  font-weight: 700;
}

.typing {
  color: var(--primary);
}

.typing-caret {
  display: inline-block;
  width: 3px;
  height: 1.2em;
  margin-left: var(--space-1);
  vertical-align: text-bottom;
  background-color: var(--accent);
  animation: blink 1s step-end infinite;
}

.hero-intro {
  max-width: 36rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
  line-height: 1.7;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  align-items: center;
  gap: var(--space-6);
}

.hero-portrait {
  position: relative;
  display: flex;
  justify-content: center;
}

.portrait-glow {
  position: absolute;
  inset: 10%;
  border-radius: var(--radius-full);
  background: var(--gradient-brand);
  filter: blur(60px);
}

.portrait-ring {
  position: relative;
  width: 18rem;
  height: 18rem;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  border: 2px solid rgba(59, 130, 246, 0.3);
  background-color: var(--surface-muted);
}

.portrait-ring img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-full);
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
  align-items: center;
}

.about-image {
  position: relative;
}

.about-image-glow {
  position: absolute;
  inset: -4px;
  border-radius: var(--radius-2xl);
  background: var(--gradient-brand);
  opacity: 0.25;
  filter: blur(8px);
  transition: opacity var(--transition-slow) var(--easing-standard);
}

.about-image:hover .about-image-glow {
  opacity: 0.5;
}

.about-image-frame {
  position: relative;
  border-radius: var(--radius-2xl);
  overflow: hidden;
  background-color: var(--surface);
}

.about-image-frame img {
  display: block;
  width: 100%;
  height: auto;
  transition: transform 0.7s var(--easing-standard);
}

.about-image:hover img {
  transform: scale(1.05);
}

.about-text {
  color: var(--text-secondary);
  font-size: 1.125rem;
  line-height: 1.8;
  margin-bottom: var(--space-4);
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
}

.skill-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: var(--space-6);
}

.skill-card:hover {
  transform: translateY(-8px) scale(1.05);
}

.skill-glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
  opacity: 0;
  transition: opacity var(--transition-slow) var(--easing-standard);
}

.skill-card:hover .skill-glow {
  opacity: 0.1;
}

.skill-icon {
  position: relative;
  width: 4rem;
  height: 4rem;
  margin-bottom: var(--space-4);
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  border: 1px solid var(--border);
}

.skill-icon img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.skill-name {
  position: relative;
  font-weight: 700;
  font-size: 0.875rem;
}

.skill-bar {
  position: absolute;
  bottom: 0;
  left: 0;
  height: 4px;
  width: 0;
  background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
  transition: width var(--transition-slow) var(--easing-standard);
}

.skill-card:hover .skill-bar {
  width: 100%;
}

/* Projects */
.projects-header {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.projects-header .section-blurb {
  margin-bottom: 0;
}

.projects-rule {
  flex: 1;
  height: 1px;
  max-width: 24rem;
  background-color: var(--border);
}

.projects-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
}

.project-card {
  display: flex;
  flex-direction: column;
}

.project-wash {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, rgba(59, 130, 246, 0.06), transparent);
  opacity: 0;
  transition: opacity var(--transition-slow) var(--easing-standard);
}

.project-card:hover .project-wash {
  opacity: 1;
}

.project-body {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: var(--space-8);
}

.project-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.project-logo {
  width: 4rem;
  height: 4rem;
  flex-shrink: 0;
  padding: var(--space-3);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  border: 1px solid var(--border);
}

.project-logo img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.project-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  transition: color var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-title {
  color: var(--primary);
}

.project-desc {
  flex: 1;
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: var(--space-8);
}

.project-footer {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  color: var(--text-tertiary);
}

.project-rule {
  flex: 1;
  height: 1px;
  background-color: var(--border);
}

/* Contact */
.contact {
  text-align: center;
  overflow: hidden;
}

.contact-backdrop {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.contact-blob {
  position: absolute;
  width: 16rem;
  height: 16rem;
  border-radius: var(--radius-full);
  filter: blur(100px);
}

.contact-blob.blue {
  top: 25%;
  left: 25%;
  background-color: rgba(59, 130, 246, 0.1);
}

.contact-blob.cyan {
  bottom: 25%;
  right: 25%;
  background-color: rgba(6, 182, 212, 0.1);
}

.contact-inner {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
}

.contact-title {
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: -0.02em;
}

.contact-cards {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
  max-width: 42rem;
  margin: 0 auto var(--space-12);
}

.contact-card {
  padding: var(--space-6);
  background-color: var(--surface-glass);
  backdrop-filter: blur(8px);
}

.contact-label {
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.contact-label.cyan {
  color: var(--accent);
}

.contact-value {
  font-size: 1.25rem;
  font-weight: 700;
}

.contact-actions {
  display: flex;
  justify-content: center;
}

@media (min-width: 640px) {
  .skills-grid { grid-template-columns: repeat(3, 1fr); }
  .contact-cards { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
  .hero-title { font-size: 4.5rem; }
  .portrait-ring { width: 24rem; height: 24rem; }
  .about-grid { grid-template-columns: repeat(2, 1fr); }
  .projects-grid { grid-template-columns: repeat(2, 1fr); }
  .skills-grid { grid-template-columns: repeat(4, 1fr); }
  .contact-title { font-size: 4.5rem; }
}

@media (min-width: 1024px) {
  .hero-grid { grid-template-columns: repeat(2, 1fr); }
  .hero-content { text-align: left; align-items: flex-start; }
  .hero-actions { justify-content: flex-start; }
  .projects-grid { grid-template-columns: repeat(3, 1fr); }
  .skills-grid { grid-template-columns: repeat(5, 1fr); }
}
"#;
