//! Stylesheet for the landing page.
//!
//! Inlined into `<head>` by the static render and injected as a `<style>`
//! element by the browser bundle, so both ship identical styling.
//!
//! Dark theme with purple/teal/pink accents, Inter typography.

/// Inter from Google Fonts (`display=swap`).
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap";

/// Complete CSS for the page.
pub const STOREFRONT_CSS: &str = r#"
:root {
    --bg-page: #0a0a0f;
    --bg-raised: #12121a;
    --bg-card: #181824;
    --text-bright: #f1f5f9;
    --text-body: #cbd5e1;
    --text-dim: #94a3b8;
    --primary-300: #c4b5fd;
    --primary-400: #a78bfa;
    --primary-500: #8b5cf6;
    --primary-600: #7c3aed;
    --accent-300: #5eead4;
    --accent-400: #2dd4bf;
    --secondary-300: #f9a8d4;
    --secondary-400: #f472b6;
    --border-subtle: rgba(167, 139, 250, 0.1);
    --border-visible: rgba(167, 139, 250, 0.3);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --header-height: 80px;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg-page);
    color: var(--text-body);
    font-family: var(--font-sans);
    line-height: 1.6;
}

.antialiased {
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

section[id] {
    scroll-margin-top: var(--header-height);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

button {
    font: inherit;
    cursor: pointer;
    border: none;
    background: none;
}

/* ===== Navbar ===== */

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    border-bottom: 1px solid transparent;
    transition: all 300ms ease;
}

.navbar-solid {
    background: rgba(10, 10, 15, 0.95);
    backdrop-filter: blur(24px);
    -webkit-backdrop-filter: blur(24px);
    box-shadow: 0 10px 15px -3px rgba(167, 139, 250, 0.05);
    border-bottom-color: var(--border-subtle);
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: var(--header-height);
}

.navbar-brand,
.navbar-link {
    text-decoration: none;
}

.navbar-brand {
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    transition: color 300ms ease;
}

.navbar-brand:hover {
    color: var(--accent-400);
}

.navbar-brand-accent {
    color: var(--primary-400);
}

.navbar-brand-accent:hover {
    color: var(--primary-500);
}

.navbar-links {
    display: none;
    gap: 2rem;
}

@media (min-width: 768px) {
    .navbar-links {
        display: flex;
        align-items: center;
    }
}

.navbar-link {
    font-weight: 500;
    color: #e2e8f0;
    transition: all 300ms ease;
}

.navbar-link:hover {
    color: #fff;
    transform: scale(1.05);
}

.navbar-link-muted {
    color: var(--text-body);
}

.navbar-link-muted:hover {
    color: var(--primary-400);
}

.btn-login {
    padding: 0.625rem 1.5rem;
    border-radius: 9999px;
    font-weight: 600;
    color: #fff;
    transition: all 300ms ease;
}

.btn-login:hover {
    transform: scale(1.05);
}

.btn-login-ghost {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(12px);
    border: 2px solid var(--border-visible);
}

.btn-login-ghost:hover {
    background: rgba(255, 255, 255, 0.1);
    border-color: rgba(167, 139, 250, 0.6);
}

.btn-login-gradient {
    background: linear-gradient(to right, var(--primary-400), var(--primary-500));
    box-shadow: 0 4px 6px -1px rgba(167, 139, 250, 0.2);
}

.btn-login-gradient:hover {
    background: linear-gradient(to right, var(--primary-500), var(--primary-600));
    box-shadow: 0 20px 25px -5px rgba(167, 139, 250, 0.3);
}

/* ===== Buttons ===== */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    font-size: 1.125rem;
    text-decoration: none;
    transition: all 300ms ease;
}

.btn:hover {
    transform: scale(1.05);
}

.btn-primary {
    color: #fff;
    background: linear-gradient(to right, var(--primary-400), var(--primary-500));
}

.btn-primary:hover {
    box-shadow: 0 25px 50px -12px rgba(167, 139, 250, 0.3);
}

.btn-primary:disabled {
    opacity: 0.5;
    cursor: not-allowed;
    transform: none;
}

.btn-ghost {
    color: #e2e8f0;
    background: rgba(255, 255, 255, 0.05);
    border: 2px solid var(--border-visible);
}

.btn-light {
    color: var(--primary-600);
    background: #fff;
}

.btn-block {
    width: 100%;
    font-size: 1rem;
    padding: 0.75rem 1rem;
}

.btn-arrow {
    display: inline-block;
    transition: transform 200ms ease;
}

.btn:hover .btn-arrow {
    transform: translateX(4px);
}

/* ===== Hero ===== */

.hero {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: var(--bg-page);
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom right, #1a0f2e, #0e1628, var(--bg-page));
}

.hero-blob {
    position: absolute;
    border-radius: 9999px;
    mix-blend-mode: screen;
    filter: blur(40px);
    animation: blob 7s infinite;
}

.hero-blob-1 { top: 2.5rem; left: -5rem; width: 24rem; height: 24rem; background: var(--primary-300); opacity: 0.4; }
.hero-blob-2 { top: 5rem; right: -5rem; width: 20rem; height: 20rem; background: var(--secondary-300); opacity: 0.35; animation-delay: 2s; }
.hero-blob-3 { bottom: -5rem; left: 10rem; width: 24rem; height: 24rem; background: var(--accent-300); opacity: 0.3; animation-delay: 4s; }
.hero-blob-4 { bottom: 10rem; right: 5rem; width: 18rem; height: 18rem; background: var(--primary-400); opacity: 0.4; animation-delay: 6s; }

.hero-grid {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
    background-size: 50px 50px;
}

.hero-vignette {
    position: absolute;
    inset: 0;
    background: radial-gradient(ellipse at center, transparent 40%, rgba(0, 0, 0, 0.6));
}

.hero-content {
    position: relative;
    z-index: 10;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #fff;
    padding-top: var(--header-height);
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-body);
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border-visible);
    border-radius: 9999px;
    backdrop-filter: blur(12px);
}

.hero-badge-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: var(--accent-400);
    box-shadow: 0 0 10px rgba(45, 212, 191, 0.5);
    animation: pulse 2s infinite;
}

.hero-title {
    max-width: 64rem;
    margin: 0 0 1.5rem;
    font-size: clamp(3rem, 8vw, 6rem);
    font-weight: 700;
    line-height: 1.1;
}

.hero-title-lead {
    color: var(--text-bright);
}

.hero-title-accent {
    display: block;
    margin-top: 0.5rem;
    background: linear-gradient(to right, var(--primary-400), var(--accent-400), var(--secondary-300));
    background-size: 200% auto;
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    animation: shimmer 3s linear infinite;
}

.hero-description {
    max-width: 42rem;
    margin: 0 0 3rem;
    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
    color: var(--text-dim);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 4rem;
}

.trust-badges {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    max-width: 42rem;
}

.trust-badge {
    display: flex;
    flex-direction: column;
    align-items: center;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-body);
}

.trust-badge p {
    margin: 0;
}

.trust-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    margin-bottom: 0.75rem;
    border-radius: 9999px;
    transition: transform 300ms ease;
}

.trust-icon:hover {
    transform: scale(1.1);
}

.trust-icon-primary { color: var(--primary-400); background: rgba(167, 139, 250, 0.1); border: 1px solid rgba(167, 139, 250, 0.2); }
.trust-icon-accent { color: var(--accent-400); background: rgba(94, 234, 212, 0.1); border: 1px solid rgba(94, 234, 212, 0.2); }
.trust-icon-secondary { color: var(--secondary-400); background: rgba(249, 168, 212, 0.1); border: 1px solid rgba(249, 168, 212, 0.2); }

.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    color: var(--text-dim);
    animation: bounce 1s infinite;
}

/* ===== Sections ===== */

.section {
    padding: 6rem 0;
}

.section-header {
    text-align: center;
    margin-bottom: 3rem;
}

.section-label {
    display: inline-block;
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
    font-weight: 600;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--primary-400);
}

.section-title {
    margin: 0 0 1rem;
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 700;
    color: var(--text-bright);
}

.section-description {
    margin: 0 auto;
    max-width: 36rem;
    color: var(--text-dim);
}

.category-grid,
.product-grid,
.benefit-grid,
.testimonial-grid {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}

.category-card,
.product-card,
.benefit-card,
.testimonial-card {
    margin: 0;
    padding: 1.5rem;
    background: var(--bg-card);
    border: 1px solid var(--border-subtle);
    border-radius: 1rem;
    transition: all 300ms ease;
}

.category-card:hover,
.product-card:hover,
.benefit-card:hover {
    border-color: var(--border-visible);
    transform: translateY(-4px);
}

.category-card {
    display: block;
    text-decoration: none;
    color: inherit;
}

.category-name,
.product-name,
.benefit-title {
    margin: 0 0 0.5rem;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text-bright);
}

.category-description,
.benefit-description {
    margin: 0 0 1rem;
    color: var(--text-dim);
}

.category-count {
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--accent-400);
}

.section-best-sellers {
    background: var(--bg-raised);
}

.product-card {
    display: flex;
    flex-direction: column;
    padding: 0;
    overflow: hidden;
}

.product-media {
    position: relative;
    height: 10rem;
    padding: 1rem;
    background: linear-gradient(135deg, rgba(167, 139, 250, 0.2), rgba(45, 212, 191, 0.1));
}

.product-category {
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-body);
}

.stock-badge {
    position: absolute;
    top: 1rem;
    right: 1rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.stock-low { color: #fff; background: var(--secondary-400); }
.stock-out { color: var(--text-dim); background: rgba(255, 255, 255, 0.1); }

.product-body {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1.5rem;
}

.product-price {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--primary-400);
}

.stars {
    display: flex;
    gap: 0.125rem;
}

.star { display: inline-flex; }
.star-full { color: #fbbf24; }
.star-half { color: #fbbf24; opacity: 0.5; }
.star-empty { color: rgba(255, 255, 255, 0.15); }

.benefit-icon {
    display: inline-flex;
    padding: 0.75rem;
    margin-bottom: 1rem;
    border-radius: 0.75rem;
    color: var(--primary-400);
    background: rgba(167, 139, 250, 0.1);
}

.testimonial-quote {
    margin: 1rem 0;
    font-size: 1.05rem;
    color: var(--text-body);
}

.testimonial-author {
    display: block;
    font-weight: 600;
    color: var(--text-bright);
}

.testimonial-role {
    font-size: 0.875rem;
    color: var(--text-dim);
}

.social-stats {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 3rem;
    margin: 4rem 0 0;
}

.social-stat {
    display: flex;
    flex-direction: column-reverse;
    align-items: center;
}

.social-stat dd {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 800;
    color: var(--text-bright);
}

.social-stat dt {
    color: var(--text-dim);
}

.section-cta {
    padding: 4rem 0;
    background: var(--primary-600);
}

.cta-inner {
    text-align: center;
}

.cta-title {
    margin: 0 0 1.5rem;
    font-size: 2.25rem;
    font-weight: 700;
    color: #fff;
}

.cta-description {
    margin: 0 0 2rem;
    color: #e2e8f0;
}

/* ===== Animations ===== */

.fade-in-down { animation: fade-in-down 0.8s ease-out both; }
.fade-in-up { animation: fade-in-up 0.8s ease-out both; }
.delay-200 { animation-delay: 200ms; }
.delay-400 { animation-delay: 400ms; }
.delay-600 { animation-delay: 600ms; }

@keyframes blob {
    0%, 100% { transform: translate(0, 0) scale(1); }
    33% { transform: translate(30px, -50px) scale(1.1); }
    66% { transform: translate(-20px, 20px) scale(0.9); }
}

@keyframes shimmer {
    to { background-position: 200% center; }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}

@keyframes fade-in-down {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    *, *::before, *::after { animation: none !important; transition: none !important; }
}
"#;
