//! Global CSS styles for the portfolio app.
//!
//! The palette variables carry blue defaults here; the active theme
//! re-renders a `:root` override block after this sheet.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Theme palette (overridden by the theme switcher) */
  --primary-color: #4d5cfe;
  --secondary-color: #2d3fe0;
  --dark-color: #1a2033;

  /* Fixed colors */
  --bg: #f7f8fc;
  --surface: #ffffff;
  --text-primary: #22283a;
  --text-secondary: rgba(34, 40, 58, 0.7);
  --success: #28a745;
  --error: #dc3545;
  --info: #17a2b8;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--dark-color);
  color: #fff;
}

.nav-brand {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.05em;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-links ul {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-links a {
  color: #fff;
  text-decoration: none;
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}

.nav-links a:hover {
  color: var(--primary-color);
}

/* Burger hidden on desktop */
.burger {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
}

.burger div {
  width: 25px;
  height: 3px;
  margin: 5px 0;
  background: #fff;
  transition: all var(--transition-normal);
}

.burger.toggle .line1 {
  transform: rotate(-45deg) translate(-5px, 6px);
}

.burger.toggle .line2 {
  opacity: 0;
}

.burger.toggle .line3 {
  transform: rotate(45deg) translate(-5px, -6px);
}

@media (max-width: 768px) {
  .burger {
    display: block;
  }

  .nav-links {
    position: fixed;
    top: 3.5rem;
    right: 0;
    height: calc(100vh - 3.5rem);
    width: 60%;
    flex-direction: column;
    padding-top: 2rem;
    background: var(--dark-color);
    transform: translateX(100%);
    transition: transform var(--transition-slow);
  }

  .nav-links ul {
    flex-direction: column;
    align-items: center;
  }

  .nav-links.nav-active {
    transform: translateX(0);
  }

  .nav-links.nav-active li {
    opacity: 0;
    animation: navLinkFade 0.5s ease forwards;
  }
}

@keyframes navLinkFade {
  from {
    opacity: 0;
    transform: translateX(50px);
  }
  to {
    opacity: 1;
    transform: translateX(0);
  }
}

/* === Sections === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 60vh;
  padding: 2rem;
  text-align: center;
  background: linear-gradient(160deg, var(--dark-color), var(--secondary-color));
  color: #fff;
}

.hero-title {
  font-size: 2.5rem;
}

.hero-subtitle {
  color: rgba(255, 255, 255, 0.8);
  max-width: 36rem;
}

.section {
  max-width: 64rem;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.section-header {
  font-size: 1.75rem;
  margin-bottom: 1.5rem;
  color: var(--dark-color);
}

.section-text {
  margin-bottom: 1.5rem;
  color: var(--text-secondary);
}

.footer {
  padding: 2rem;
  text-align: center;
  background: var(--dark-color);
  color: rgba(255, 255, 255, 0.7);
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.6rem 1.4rem;
  border: none;
  border-radius: 5px;
  background: var(--primary-color);
  color: #fff;
  font-size: 1rem;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn:hover {
  background: var(--secondary-color);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-secondary {
  background: var(--dark-color);
}

/* === Project gallery === */
.projects-container {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.project-loader {
  grid-column: 1 / -1;
  padding: 2rem;
  text-align: center;
  color: var(--text-secondary);
}

.project-error {
  grid-column: 1 / -1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem;
  border: 1px solid var(--error);
  border-radius: 8px;
  color: var(--error);
}

.project-card {
  overflow: hidden;
  border-radius: 8px;
  background: var(--surface);
  box-shadow: 0 3px 10px rgba(0, 0, 0, 0.08);
  opacity: 0;
  transform: translateY(20px);
  animation: cardEnter 0.5s ease forwards;
}

@keyframes cardEnter {
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.project-image img {
  display: block;
  width: 100%;
  aspect-ratio: 3 / 2;
  object-fit: cover;
  background: var(--dark-color);
}

.project-content {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
}

.project-title {
  font-size: 1.2rem;
}

.project-description {
  font-size: 0.95rem;
  color: var(--text-secondary);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.project-tag {
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--primary-color);
  color: #fff;
  font-size: 0.75rem;
}

.project-links {
  display: flex;
  gap: 1rem;
}

.project-link {
  color: var(--primary-color);
  font-size: 0.9rem;
  text-decoration: none;
}

.project-link:hover {
  color: var(--secondary-color);
}

/* === Contact form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 32rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
}

.input {
  padding: 0.6rem 0.8rem;
  border: 1px solid rgba(34, 40, 58, 0.2);
  border-radius: 5px;
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input:focus {
  outline: none;
  border-color: var(--primary-color);
}

.message-textarea {
  resize: vertical;
}

/* === Theme switcher === */
.theme-switcher {
  display: flex;
  gap: 0.5rem;
}

.theme-swatch {
  width: 1.2rem;
  height: 1.2rem;
  border: 2px solid transparent;
  border-radius: 50%;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.theme-swatch:hover {
  transform: scale(1.15);
}

.theme-swatch.active {
  border-color: #fff;
}

/* === Notifications === */
.notification {
  position: fixed;
  bottom: 20px;
  right: 20px;
  z-index: 1001;
  padding: 15px 20px;
  border-radius: 5px;
  background-color: #333;
  color: #fff;
  box-shadow: 0 3px 10px rgba(0, 0, 0, 0.2);
  transform: translateY(100px);
  opacity: 0;
  transition: all var(--transition-normal);
}

.notification.show {
  transform: translateY(0);
  opacity: 1;
}

.notification.success {
  background-color: var(--success);
}

.notification.error {
  background-color: var(--error);
}

.notification.info {
  background-color: var(--info);
}
"#;
