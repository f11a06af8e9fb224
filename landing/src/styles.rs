//! Stylesheet for the landing page.
//!
//! Inlined into the document by `App` so the wasm bundle is the only asset the
//! page needs besides images. Reveal-driven pieces start hidden and animate in
//! once their element gains the `revealed` class; per-element delays come in
//! through the `--stagger` custom property.

use curv_motion::variants::luxury_ease_css;

/// Complete CSS for the page - dark marble palette with gold accents.
pub const SITE_CSS: &str = r#"
:root {
    --background: hsl(30 10% 6%);
    --foreground: hsl(40 20% 92%);
    --card: hsl(30 8% 10%);
    --secondary: hsl(30 8% 14%);
    --muted: hsl(35 8% 60%);
    --border: hsl(35 10% 22%);
    --primary: hsl(20 70% 55%);
    --accent: hsl(43 74% 49%);
    --font-serif: 'Playfair Display', Georgia, serif;
    --font-sans: 'Inter', system-ui, sans-serif;
    --container-max: 1536px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
    scroll-snap-type: y proximity;
}

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: var(--font-sans);
    overflow-x: hidden;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

button {
    font: inherit;
    color: inherit;
    background: none;
    border: none;
    cursor: pointer;
}

.container {
    position: relative;
    z-index: 1;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

section {
    position: relative;
    padding: 8rem 0;
    overflow: hidden;
}

.section-snap {
    scroll-snap-align: start;
}

/* Film grain over everything */
.grain {
    position: fixed;
    inset: 0;
    z-index: 100;
    pointer-events: none;
    opacity: 0.04;
    background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
}

/* Typography */
.gradient-primary {
    background: linear-gradient(135deg, var(--primary), var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.gradient-gold {
    background: linear-gradient(135deg, hsl(43 85% 65%), var(--accent), hsl(35 80% 40%));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.eyebrow {
    display: inline-block;
    margin-bottom: 1rem;
    font-size: 0.75rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
}

.eyebrow.primary { color: var(--primary); }
.eyebrow.accent, .accent { color: var(--accent); }
.muted { color: var(--muted); }

.section-title {
    margin: 0;
    font-family: var(--font-serif);
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 500;
}

.section-lead {
    max-width: 42rem;
    margin: 1.5rem auto 0;
    font-size: 1.125rem;
    color: var(--muted);
}

.section-head {
    margin-bottom: 4rem;
    text-align: center;
}

/* Buttons */
.btn {
    display: inline-block;
    padding: 1rem 2.5rem;
    font-size: 0.8rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    transition: transform 300ms var(--ease-luxury), box-shadow 300ms var(--ease-luxury);
}

.btn:hover { transform: scale(1.02); }
.btn:active { transform: scale(0.98); }

.btn-luxury {
    border: 1px solid var(--primary);
    color: var(--primary);
}

.btn-luxury:hover {
    background: var(--primary);
    color: var(--background);
}

.btn-gold {
    background: linear-gradient(135deg, hsl(43 85% 60%), var(--accent));
    color: var(--background);
}

.btn-gold:hover { box-shadow: 0 0 40px hsl(43 74% 49% / 0.4); }

.round-button {
    width: 3rem;
    height: 3rem;
    border: 1px solid var(--border);
    border-radius: 50%;
    font-size: 1.5rem;
    transition: border-color 300ms, color 300ms, transform 300ms;
}

.round-button:hover {
    border-color: var(--primary);
    color: var(--primary);
    transform: scale(1.1);
}

/* Entrance keyframes */
@keyframes fade-up {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: none; }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes pop-in {
    from { opacity: 0; transform: scale(0); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes breathe {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.05); }
}

@keyframes glow {
    0%, 100% { box-shadow: 0 0 30px hsl(43 85% 55% / 0.2); }
    50% { box-shadow: 0 0 60px hsl(43 85% 55% / 0.4); }
}

@keyframes pulse-glow {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

@keyframes bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(10px); }
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

@keyframes belt {
    from { transform: translateX(0); }
    to { transform: translateX(-1000px); }
}

.fade-up { animation: fade-up 800ms var(--ease-luxury) both; }
.fade-in { animation: fade-in 800ms ease both; }
.breathe { animation: breathe 3s ease-in-out infinite; }
.glow { animation: glow 2s ease-in-out infinite; }
.pulse-glow { animation: pulse-glow 2s ease-in-out infinite; }

/* Reveal-on-scroll */
.section-head,
.about-text,
.about-badge,
.brand-grid > *,
.brand-spotlight,
.products-cta,
.contact-phone,
.contact-grid > *,
.footer-column,
.footer-links li,
.footer-social-link {
    opacity: 0;
    transform: translateY(40px);
    transition:
        opacity 800ms var(--ease-luxury) var(--stagger, 0ms),
        transform 800ms var(--ease-luxury) var(--stagger, 0ms);
}

.about-badge { transform: scale(0.8); }
.contact-phone { transform: scale(0.9); }

.slide-from-left {
    opacity: 0;
    transform: translateX(-100px);
    transition: opacity 1s var(--ease-luxury), transform 1s var(--ease-luxury);
}

.revealed,
.revealed .brand-grid > *,
.brand-grid.revealed > *,
.contact-grid.revealed > *,
.footer-column.revealed .footer-links li,
.footer-column.revealed .footer-social-link {
    opacity: 1;
    transform: none;
}

.section-rule,
.footer-divider {
    height: 1px;
    background: linear-gradient(90deg, transparent, var(--primary), transparent);
    transform: scaleX(0);
    transition: transform 1.5s var(--ease-luxury) 400ms;
}

.section-rule.from-left,
.footer-divider {
    background: var(--border);
    transform-origin: left;
}

.section-rule.revealed,
.footer-divider.revealed {
    transform: scaleX(1);
}

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.5rem;
    backdrop-filter: blur(8px);
    animation: fade-in 800ms ease both;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    max-width: var(--container-max);
    margin: 0 auto;
}

.nav-brand {
    display: flex;
    flex-direction: column;
}

.nav-title {
    font-family: var(--font-serif);
    font-size: 1.75rem;
    font-weight: 700;
}

.nav-tagline {
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.nav-actions {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-phone { color: var(--primary); }

.nav-toggle {
    width: 3rem;
    height: 3rem;
    font-size: 1.25rem;
    transition: transform 400ms var(--ease-luxury);
}

.nav-toggle.open { transform: rotate(90deg); }

.nav-overlay {
    position: fixed;
    inset: 0;
    z-index: 40;
    display: flex;
    align-items: center;
    background: var(--background);
    animation: fade-in 500ms var(--ease-luxury) both;
}

.nav-overlay-inner {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.nav-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.nav-menu-item {
    display: flex;
    align-items: baseline;
    gap: 1.5rem;
    font-family: var(--font-serif);
    font-size: clamp(2.5rem, 7vw, 5rem);
    animation: fade-up 600ms var(--ease-luxury) both;
}

.nav-menu-item:hover { color: var(--primary); }

.nav-menu-index {
    font-family: var(--font-sans);
    font-size: 0.9rem;
    color: var(--muted);
}

.nav-menu-rule {
    flex: 1;
    height: 1px;
    background: var(--border);
}

.nav-menu-contact {
    margin-top: 3rem;
    color: var(--primary);
    animation: fade-in 600ms ease 900ms both;
}

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 0;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    will-change: transform;
}

.hero-backdrop-shade {
    position: absolute;
    inset: 0;
    z-index: 1;
    background: linear-gradient(180deg, hsl(30 10% 6% / 0.6), var(--background));
}

.hero-shape {
    position: absolute;
    border: 1px solid hsl(20 70% 55% / 0.3);
    animation: spin 40s linear infinite;
}

.hero-shape-diamond { top: 20%; right: 10%; width: 8rem; height: 8rem; transform: rotate(45deg); }
.hero-shape-square { bottom: 25%; left: 8%; width: 5rem; height: 5rem; animation-duration: 60s; }
.hero-shape-small { top: 60%; right: 25%; width: 2rem; height: 2rem; border-color: hsl(43 74% 49% / 0.4); }

.hero-content {
    position: relative;
    z-index: 2;
    width: 100%;
    will-change: transform, opacity;
}

.hero-badge {
    display: inline-block;
    margin-bottom: 2rem;
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    font-size: 0.75rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--accent);
}

.hero-title,
.hero-tagline {
    margin: 0;
    font-family: var(--font-serif);
    font-size: clamp(3rem, 9vw, 8rem);
    font-weight: 500;
    line-height: 1.05;
}

.hero-word {
    display: inline-block;
    margin-right: 0.25em;
    animation: fade-up 1s var(--ease-luxury) both;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 2rem;
    margin-top: 3rem;
}

.hero-location {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.hero-location-pin {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border: 1px solid var(--accent);
    border-radius: 50%;
    color: var(--accent);
}

.hero-location-label {
    display: block;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.hero-scroll {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    display: flex;
    flex-direction: column;
    align-items: center;
    font-size: 0.7rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--muted);
    transform: translateX(-50%);
}

.hero-scroll-chevron { animation: bob 2s ease-in-out infinite; }

.hero-side-text {
    position: absolute;
    right: 2rem;
    top: 50%;
    writing-mode: vertical-rl;
    font-size: 0.7rem;
    letter-spacing: 0.4em;
    text-transform: uppercase;
    color: var(--muted);
}

/* Products */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.5rem;
}

.product-card {
    opacity: 0;
    transform: translateY(60px);
    transition:
        opacity 800ms var(--ease-luxury) var(--stagger, 0ms),
        transform 800ms var(--ease-luxury) var(--stagger, 0ms);
}

.product-card.revealed {
    opacity: 1;
    transform: none;
}

.product-card-inner {
    position: relative;
    aspect-ratio: 3 / 4;
    overflow: hidden;
    background: var(--card);
}

.product-card-media {
    position: absolute;
    inset: 0;
    transition: transform 700ms var(--ease-luxury);
}

.product-card:hover .product-card-media { transform: scale(1.1); }

.product-card-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(0deg, var(--background), transparent 70%);
}

.product-card-body {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 2rem;
}

.product-card-number {
    font-size: 0.75rem;
    letter-spacing: 0.3em;
    color: var(--muted);
}

.product-card-title {
    margin: 0.5rem 0;
    font-family: var(--font-serif);
    font-size: 1.75rem;
    font-weight: 500;
}

.product-card-description {
    color: var(--muted);
}

.product-card-cta {
    display: flex;
    gap: 0.5rem;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 400ms, transform 400ms;
}

.product-card:hover .product-card-cta {
    opacity: 1;
    transform: none;
}

.product-card-border {
    position: absolute;
    inset: 0;
    border: 2px solid transparent;
    transition: border-color 500ms;
}

.accent-primary .product-card-cta { color: var(--primary); }
.accent-gold .product-card-cta { color: var(--accent); }
.accent-primary:hover .product-card-border { border-color: var(--primary); }
.accent-gold:hover .product-card-border { border-color: var(--accent); }

.products-cta {
    margin-top: 4rem;
    text-align: center;
}

/* About */
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    align-items: center;
    gap: 4rem;
}

.about-media {
    position: relative;
}

.about-image {
    aspect-ratio: 4 / 5;
    overflow: hidden;
    will-change: transform;
}

.about-frame {
    position: absolute;
    inset: 1.5rem -1.5rem -1.5rem 1.5rem;
    z-index: -1;
    border: 1px solid var(--primary);
}

.about-badge {
    position: absolute;
    right: -2rem;
    bottom: -2rem;
    padding: 1.5rem 2rem;
    border: 1px solid var(--border);
    background: var(--card);
    transition-delay: 500ms;
}

.about-badge-label {
    margin: 0;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.about-badge-year {
    margin: 0;
    font-family: var(--font-serif);
    font-size: 3rem;
    font-weight: 700;
}

.about-lead,
.about-body {
    color: var(--muted);
    line-height: 1.8;
}

.stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin-top: 3rem;
}

.stat-value {
    margin: 0;
    font-family: var(--font-serif);
    font-size: 2.5rem;
    color: var(--primary);
}

.stat-label {
    margin: 0;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.about-cta { margin-top: 3rem; }

/* Brands */
.brand-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
    gap: 1.5rem;
}

.brand-tile {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    aspect-ratio: 1;
    border: 1px solid var(--border);
    background: hsl(30 8% 14% / 0.2);
    cursor: pointer;
}

.brand-tile:hover { transform: translateY(-5px) scale(1.05); }

.brand-tile.featured {
    border-color: hsl(43 74% 49% / 0.5);
    background: hsl(43 74% 49% / 0.05);
}

.brand-glow {
    position: absolute;
    inset: 0;
    animation: glow 2s ease-in-out infinite;
}

.brand-name {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    color: var(--muted);
    transition: color 300ms;
}

.brand-tile:hover .brand-name { color: var(--foreground); }
.brand-tile.featured .brand-name { color: var(--accent); }

.brand-hover-border {
    position: absolute;
    inset: 0;
    border: 2px solid var(--primary);
    opacity: 0;
    transition: opacity 300ms;
}

.brand-tile.featured .brand-hover-border { border-color: var(--accent); }
.brand-tile:hover .brand-hover-border { opacity: 1; }

.brand-badge {
    position: absolute;
    top: -0.75rem;
    left: 50%;
    padding: 0.25rem 0.75rem;
    background: var(--accent);
    color: var(--background);
    font-size: 0.625rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transform: translateX(-50%);
}

.brand-spotlight {
    position: relative;
    margin-top: 4rem;
    padding: 3rem;
    border: 1px solid hsl(43 74% 49% / 0.3);
    background: linear-gradient(90deg, hsl(43 74% 49% / 0.05), transparent, hsl(43 74% 49% / 0.05));
    transition-delay: 600ms;
}

.corner {
    position: absolute;
    width: 5rem;
    height: 5rem;
}

.corner-top { top: 0; left: 0; border-top: 1px solid var(--accent); border-left: 1px solid var(--accent); }
.corner-bottom { bottom: 0; right: 0; border-bottom: 1px solid var(--accent); border-right: 1px solid var(--accent); }

.brand-spotlight-body {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
}

.brand-spotlight-mark {
    font-family: var(--font-serif);
    font-size: clamp(3.75rem, 8vw, 6rem);
    font-weight: 700;
}

.brand-belt {
    margin-top: 6rem;
    overflow: hidden;
    opacity: 0;
    transition: opacity 600ms ease 800ms;
}

.brand-belt.revealed { opacity: 1; }

.brand-belt-track {
    display: flex;
    gap: 4rem;
    white-space: nowrap;
    animation: belt 30s linear infinite;
}

.brand-belt-item {
    font-family: var(--font-serif);
    font-size: 2.25rem;
    color: hsl(35 10% 22% / 0.5);
}

/* Testimonials */
@keyframes slide-in {
    from { opacity: 0; transform: var(--slide-from); }
    to { opacity: 1; transform: none; }
}

@keyframes slide-out {
    from { opacity: 1; transform: none; }
    to { opacity: 0; transform: var(--slide-to); }
}

.testimonials-quote-mark {
    position: absolute;
    top: 50%;
    left: 50%;
    font-family: var(--font-serif);
    font-size: 40vw;
    line-height: 1;
    color: var(--primary);
    opacity: 0;
    transform: translate(-50%, -50%) scale(0.5);
    transition: opacity 1s, transform 1s;
}

.testimonials-quote-mark.revealed {
    opacity: 0.05;
    transform: translate(-50%, -50%) scale(1);
}

.testimonial-stage {
    position: relative;
    display: grid;
    max-width: 56rem;
    margin: 0 auto;
    perspective: 1000px;
}

/* Incoming and outgoing slides share one grid cell */
.testimonial-card {
    grid-area: 1 / 1;
    position: relative;
    padding: 3rem;
    border: 1px solid hsl(35 10% 22% / 0.5);
    background: hsl(30 8% 10% / 0.5);
    backdrop-filter: blur(4px);
}

/* Duration and easing arrive inline with each card */
.testimonial-card.slide-in { animation-name: slide-in; animation-fill-mode: both; }
.testimonial-card.slide-out { animation-name: slide-out; animation-fill-mode: both; pointer-events: none; }

.testimonial-quote-icon {
    display: block;
    font-family: var(--font-serif);
    font-size: 4rem;
    line-height: 1;
    color: hsl(20 70% 55% / 0.3);
}

.testimonial-content {
    margin: 1.5rem 0 2rem;
    font-family: var(--font-serif);
    font-size: clamp(1.25rem, 2.5vw, 1.875rem);
    line-height: 1.6;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.testimonial-avatar {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--primary), var(--accent));
    color: var(--background);
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-weight: 700;
}

.testimonial-name { margin: 0; font-size: 1.125rem; }
.testimonial-role { margin: 0; font-size: 0.875rem; color: var(--muted); }

.testimonial-stars {
    position: absolute;
    top: 2rem;
    right: 2rem;
    display: flex;
    gap: 0.25rem;
}

.star {
    color: var(--accent);
    font-size: 1.25rem;
    animation: pop-in 300ms ease both;
}

.testimonial-shadow {
    position: absolute;
    left: 2rem;
    right: 2rem;
    bottom: -1rem;
    height: 2rem;
    background: linear-gradient(180deg, hsl(30 10% 6% / 0.5), transparent);
    filter: blur(16px);
}

.testimonial-arrows {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-top: 2rem;
}

.testimonial-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}

.dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 999px;
    background: var(--border);
    transition: width 300ms, background 300ms;
}

.dot:hover { background: var(--muted); }

.dot.active {
    width: 2rem;
    background: var(--primary);
}

/* Contact */
@keyframes drift {
    from { background-position: 0% 0%; }
    to { background-position: 100% 100%; }
}

.contact-texture {
    position: absolute;
    inset: 0;
    opacity: 0.05;
    background-image: url("data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cpath fill='%23ffffff' d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/svg%3E");
    background-size: 60px 60px;
    animation: drift 20s linear infinite alternate;
}

.contact-phone {
    margin-bottom: 4rem;
    text-align: center;
    transition-delay: 300ms;
}

.contact-phone-box {
    display: inline-block;
    padding: 2rem 3rem;
    border: 2px solid var(--primary);
    background: hsl(20 70% 55% / 0.05);
}

.contact-phone-label {
    margin: 0 0 0.5rem;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.contact-phone-number {
    margin: 0;
    font-family: var(--font-serif);
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 700;
    letter-spacing: 0.05em;
    color: var(--primary);
    font-variant-numeric: tabular-nums;
}

.contact-phone-cta {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1rem;
    font-size: 0.875rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--primary);
    transition: transform 300ms;
}

.contact-phone-link:hover .contact-phone-cta { transform: translateX(10px); }

.contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
}

.contact-card {
    display: block;
    height: 100%;
    padding: 2rem;
    border: 1px solid hsl(35 10% 22% / 0.5);
    background: hsl(30 8% 10% / 0.3);
}

.contact-card.link:hover {
    border-color: hsl(20 70% 55% / 0.5);
    transform: translateY(-5px);
}

.contact-card-icon {
    display: block;
    margin-bottom: 1rem;
    font-size: 2rem;
    color: var(--accent);
}

.contact-card.link .contact-card-icon { color: var(--primary); }

.contact-card-label {
    margin: 0 0 0.5rem;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}

.contact-card-value {
    margin: 0;
    font-size: 1.25rem;
}

.contact-card.link:hover .contact-card-value { color: var(--primary); }

/* Footer */
.footer {
    position: relative;
    padding: 6rem 0 4rem;
    overflow: hidden;
    background: linear-gradient(0deg, hsl(30 8% 14% / 0.2), var(--background));
}

.footer-stripes {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 16rem;
    opacity: 0;
    transform: translateY(100px);
    transition: opacity 1s, transform 1s;
    background-image: repeating-linear-gradient(45deg, transparent, transparent 10px, var(--primary) 10px, var(--primary) 11px);
}

.footer-stripes.revealed {
    opacity: 0.05;
    transform: none;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 3rem;
    margin-bottom: 4rem;
}

.footer-title {
    margin: 0 0 0.5rem;
    font-family: var(--font-serif);
    font-size: 1.875rem;
}

.footer-tagline,
.footer-motto {
    font-size: 0.875rem;
    color: var(--muted);
}

.footer-motto { font-style: italic; }

.footer-phone { color: var(--primary); }
.footer-phone:hover { color: var(--accent); }

.footer-heading {
    margin: 0 0 1.5rem;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--muted);
}

.footer-links {
    margin: 0;
    padding: 0;
    list-style: none;
}

.footer-links li { margin-bottom: 0.75rem; }

.footer-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.footer-link:hover { color: var(--primary); }

.footer-link-rule {
    width: 0;
    height: 1px;
    background: var(--primary);
    transition: width 300ms;
}

.footer-link:hover .footer-link-rule { width: 1rem; }

.footer-social {
    display: flex;
    gap: 1rem;
}

.footer-social-link {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border: 1px solid var(--border);
}

.footer-social-link:hover {
    border-color: var(--primary);
    color: var(--primary);
}

.footer-divider { margin-bottom: 2rem; }

.footer-bottom {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.footer-copyright,
.footer-top {
    font-size: 0.875rem;
    color: var(--muted);
    opacity: 0;
    transition: opacity 600ms ease 500ms, color 300ms;
}

.footer-copyright.revealed,
.footer-top.revealed { opacity: 1; }

.footer-top {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.footer-top:hover { color: var(--primary); }

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 1ms !important;
        transition-duration: 1ms !important;
    }
}
"#;

/// `:root` custom properties taken from the motion constants, emitted ahead of
/// [`SITE_CSS`].
pub fn motion_vars() -> String {
    format!(":root {{ --ease-luxury: {}; }}", luxury_ease_css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn easing_comes_from_motion_constants() {
        assert_eq!(motion_vars(), ":root { --ease-luxury: cubic-bezier(0.77, 0, 0.175, 1); }");
        assert!(!SITE_CSS.contains("cubic-bezier"));
    }

    #[test]
    fn slide_animations_take_timing_inline() {
        assert!(SITE_CSS.contains(".testimonial-card.slide-in { animation-name: slide-in;"));
        assert!(!SITE_CSS.contains("slide-in 600ms"));
    }
}
