//! Site-wide stylesheet, rendered once by the app shell.

pub const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1e293b;
    background: #fff;
}
a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }

/* Header */
.site-header {
    position: fixed;
    top: 0; left: 0; right: 0;
    z-index: 50;
    background: rgba(30, 41, 59, 0.9);
    backdrop-filter: blur(4px);
    transition: all 0.3s ease;
}
.site-header.scrolled {
    background: rgba(30, 41, 59, 0.95);
    backdrop-filter: blur(12px);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.header-bar { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
.logo { display: flex; align-items: center; gap: 0.75rem; color: #fff; }
.logo-mark {
    width: 2.5rem; height: 2.5rem;
    background: #fff; border-radius: 0.5rem;
    display: flex; align-items: center; justify-content: center;
}
.logo-mark-lg { width: 3rem; height: 3rem; border-radius: 0.75rem; }
.logo-text { display: flex; flex-direction: column; line-height: 1.2; }
.logo-title { font-weight: 700; font-size: 1.125rem; }
.logo-subtitle { font-size: 0.75rem; color: #cbd5e1; }
.desktop-nav { display: flex; align-items: center; gap: 2rem; }
.nav-link { color: #fff; font-weight: 500; transition: color 0.3s ease; }
.nav-link:hover, .nav-link.active { color: #cbd5e1; }
.menu-toggle { display: none; background: none; border: none; color: #fff; font-size: 1.5rem; cursor: pointer; }
.mobile-nav { padding: 1rem 0.5rem; border-top: 1px solid #334155; background: rgba(30, 41, 59, 0.95); }
.mobile-nav-link { display: block; padding: 0.75rem 1rem; color: #fff; border-radius: 0.5rem; }
.mobile-nav-link:hover, .mobile-nav-link.active { color: #cbd5e1; background: rgba(51, 65, 85, 0.5); }
.mobile-cta { padding: 0.5rem; }
.mobile-cta .btn { width: 100%; }
@media (max-width: 768px) {
    .desktop-nav { display: none; }
    .menu-toggle { display: block; }
}

/* Buttons, cards, badges */
.btn {
    display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
    padding: 0.5rem 1.5rem;
    border-radius: 0.75rem;
    font-weight: 500; font-size: 1rem;
    border: 2px solid transparent;
    cursor: pointer;
    transition: all 0.3s ease;
}
.btn:hover { transform: scale(1.05); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-primary { background: #475569; color: #fff; }
.btn-primary:hover { background: #334155; }
.btn-light { background: #fff; color: #1e293b; }
.btn-light:hover { background: #f1f5f9; }
.btn-outline { background: transparent; border-color: #fff; color: #fff; }
.btn-outline:hover { background: #fff; color: #1e293b; }
.btn-block { width: 100%; }
.card {
    background: #fff;
    border-radius: 1rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    overflow: hidden;
    transition: all 0.3s ease;
}
.card.lift:hover { transform: translateY(-0.5rem); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); }
.card-content { padding: 2rem; }
.badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 0.5rem;
    font-size: 0.75rem; font-weight: 600;
    background: #475569; color: #fff;
}
.badge-outline { background: transparent; color: #475569; border: 1px solid #cbd5e1; }
.icon-tile {
    width: 4rem; height: 4rem;
    background: #475569; border-radius: 1rem;
    display: flex; align-items: center; justify-content: center;
    font-size: 1.75rem; margin-bottom: 1.5rem;
}
.centered .icon-tile, .icon-tile.centered { margin-left: auto; margin-right: auto; }
.stagger { opacity: 0; animation: fadeInUp 0.8s ease-out forwards; }

/* Sections */
.page { min-height: 100vh; }
.hero {
    position: relative;
    padding: 8rem 0;
    text-align: center;
    color: #fff;
    background: linear-gradient(135deg, #334155, #475569, #1e293b);
}
.hero-full { height: 100vh; display: flex; align-items: center; justify-content: center; padding: 0; }
.hero h1 { font-size: 3.5rem; font-weight: 700; margin: 0 0 1.5rem; }
.hero p { font-size: 1.5rem; color: #e2e8f0; max-width: 48rem; margin: 0 auto; }
.hero .eyebrow { font-size: 1.125rem; font-weight: 500; margin-bottom: 1rem; }
.hero .accent { color: #cbd5e1; }
.section { padding: 5rem 0; }
.section-muted { background: #f8fafc; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading h2 { font-size: 2.75rem; font-weight: 700; margin: 0 0 1.5rem; }
.section-heading p { font-size: 1.25rem; color: #475569; max-width: 48rem; margin: 0 auto; }
.grid { display: grid; gap: 2rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.centered { text-align: center; }
.muted { color: #475569; line-height: 1.7; }
.feature-list { list-style: none; padding: 0; margin: 0; }
.feature-list li { display: flex; align-items: center; gap: 0.75rem; color: #475569; margin-bottom: 0.5rem; }
.feature-list li::before {
    content: ""; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #475569;
}
.step-number { font-size: 1.875rem; font-weight: 700; color: #cbd5e1; margin-bottom: 1rem; }
.cta {
    padding: 5rem 0;
    text-align: center;
    color: #fff;
    background: linear-gradient(90deg, #334155, #1e293b);
}
.cta h2 { font-size: 2.75rem; margin: 0 0 1.5rem; }
.cta p { font-size: 1.25rem; color: #e2e8f0; max-width: 42rem; margin: 0 auto 2rem; }
.actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.project-image {
    height: 16rem;
    position: relative;
    background: linear-gradient(135deg, #cbd5e1, #94a3b8);
}
.project-image .badge { position: absolute; top: 1rem; left: 1rem; }
.project-meta { display: flex; gap: 1rem; color: #475569; font-size: 0.875rem; margin-bottom: 0.5rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.stat-number { font-size: 1.875rem; font-weight: 700; }
.quote { font-style: italic; color: #475569; line-height: 1.7; }
.pill { background: #fff; border-radius: 0.75rem; padding: 1.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }

/* Contact form */
.contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
.form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.form-field label { display: block; font-weight: 500; color: #334155; margin-bottom: 0.5rem; }
.form-field input, .form-field select, .form-field textarea {
    width: 100%;
    padding: 0.75rem;
    border: 1px solid #cbd5e1;
    border-radius: 0.75rem;
    font: inherit;
}
.form-field input:focus, .form-field select:focus, .form-field textarea:focus {
    outline: none; border-color: #475569;
}
.form-error { color: #b91c1c; }
.acknowledgement { text-align: center; padding: 3rem 0; }
.acknowledgement .icon { font-size: 4rem; color: #22c55e; }
.info-row { display: flex; gap: 1rem; align-items: flex-start; }
.info-row .icon-tile { width: 3rem; height: 3rem; font-size: 1.25rem; margin: 0; flex-shrink: 0; }

/* Footer */
.site-footer { background: #1e293b; color: #fff; padding-top: 4rem; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
.footer-grid h3 { font-size: 1.125rem; margin: 0 0 1.5rem; }
.footer-grid ul { list-style: none; padding: 0; margin: 0; }
.footer-grid li { color: #cbd5e1; margin-bottom: 0.75rem; }
.footer-blurb { color: #cbd5e1; line-height: 1.7; max-width: 28rem; }
.footer-contact div { display: flex; gap: 0.75rem; color: #cbd5e1; margin-bottom: 0.75rem; }
.footer-bottom {
    display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center;
    border-top: 1px solid #334155; margin-top: 3rem; padding: 2rem 1rem;
    color: #94a3b8; font-size: 0.875rem;
}
.footer-legal { display: flex; gap: 1.5rem; }
@media (max-width: 768px) {
    .footer-grid { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.5rem; }
}
"#;
