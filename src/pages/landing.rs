use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::reveal::RevealSection;
use crate::components::service_card::ServiceGrid;
use crate::config::{BRAND, COPYRIGHT_YEAR, HOVER_DURATION_MS, HOVER_SCALE};
use crate::content::{Region, HERO_IMAGE, PROJECTS};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{stylesheet()}</style>
            <Nav />
            <main class="landing-main">
                <RevealSection region={Region::Home} class="hero">
                    <div class="container hero-grid">
                        <div>
                            <h1>{"Building Tomorrow's Infrastructure Today"}</h1>
                            <p class="hero-subtitle">
                                {format!("{} is your trusted partner in innovative civil engineering projects.", BRAND)}
                            </p>
                            <a href={Region::Contact.href()} class="hero-cta">{"Get in Touch"}</a>
                        </div>
                        <div>
                            <img src={HERO_IMAGE.src()} alt="Civil Engineering Project" class="hero-image" />
                        </div>
                    </div>
                </RevealSection>

                <RevealSection region={Region::Services}>
                    <div class="container">
                        <h2>{"Our Services"}</h2>
                        <ServiceGrid />
                    </div>
                </RevealSection>

                <RevealSection region={Region::Projects} class="projects">
                    <div class="container">
                        <h2>{"Featured Projects"}</h2>
                        <div class="projects-grid">
                            {
                                PROJECTS.iter().map(|project| html! {
                                    <div key={project.number} class="project-card hover-lift">
                                        <img src={project.image.src()} alt={project.title()} />
                                        <div class="project-body">
                                            <h3>{project.title()}</h3>
                                            <p>{project.blurb()}</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection region={Region::Contact}>
                    <div class="container contact-container">
                        <div class="contact-panel">
                            <h2>{"Contact Us"}</h2>
                            // Submitting is left to whatever hosts the page.
                            <form class="contact-form">
                                <input type="text" placeholder="Your Name" />
                                <input type="email" placeholder="Your Email" />
                                <textarea rows="4" placeholder="Your Message"></textarea>
                                <div class="contact-submit">
                                    <button type="submit" class="hero-cta">{"Send Message"}</button>
                                </div>
                            </form>
                        </div>
                    </div>
                </RevealSection>
            </main>

            <footer class="site-footer">
                <p>{format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, BRAND)}</p>
            </footer>
        </div>
    }
}

fn stylesheet() -> String {
    let hover_secs = f64::from(HOVER_DURATION_MS) / 1000.0;
    format!(
        r#"
        body {{
            margin: 0;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        }}
        .landing-page {{
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            background: linear-gradient(to bottom right, #3b82f6, #9333ea);
            color: #fff;
        }}
        .landing-main {{
            flex-grow: 1;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1rem;
        }}
        .region {{
            padding: 5rem 0;
        }}
        .region h2 {{
            font-size: 1.875rem;
            text-align: center;
            margin-bottom: 3rem;
        }}
        .top-nav {{
            position: sticky;
            top: 0;
            z-index: 50;
            padding: 1rem;
            backdrop-filter: blur(16px);
            background: rgba(255, 255, 255, 0.1);
        }}
        .nav-content {{
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            flex-wrap: wrap;
            justify-content: space-between;
            align-items: center;
        }}
        .nav-logo {{
            font-size: 1.5rem;
            font-weight: 700;
            color: #fff;
            text-decoration: none;
        }}
        .burger-menu {{
            display: none;
            background: none;
            border: none;
            color: #fff;
            cursor: pointer;
        }}
        .nav-links {{
            display: flex;
            gap: 1rem;
            list-style: none;
            margin: 0;
            padding: 0;
        }}
        .nav-link {{
            color: #fff;
            text-decoration: none;
            transition: color 0.3s;
        }}
        .nav-link:hover {{
            color: #e5e7eb;
        }}
        .hero-grid {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 2rem;
            align-items: center;
        }}
        .hero h1 {{
            font-size: 3rem;
            margin-bottom: 1rem;
        }}
        .hero-subtitle {{
            font-size: 1.25rem;
            opacity: 0.8;
            margin-bottom: 1.5rem;
        }}
        .hero-cta {{
            display: inline-block;
            background: #fff;
            color: #2563eb;
            padding: 0.75rem 1.5rem;
            border: none;
            border-radius: 0.5rem;
            font-weight: 600;
            text-decoration: none;
            cursor: pointer;
            transition: background 0.3s;
        }}
        .hero-cta:hover {{
            background: #dbeafe;
        }}
        .hero-image {{
            width: 100%;
            height: auto;
            border-radius: 0.5rem;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        }}
        .services-grid {{
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
        }}
        .hover-lift {{
            transition: transform {hover}s;
        }}
        .hover-lift:hover {{
            transform: scale({scale});
        }}
        .service-card {{
            position: relative;
        }}
        .service-card-body {{
            height: 100%;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 1.5rem;
            text-align: center;
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(16px);
            transition: background 0.3s;
        }}
        .service-card-body:hover {{
            background: rgba(255, 255, 255, 0.2);
        }}
        .service-icon {{
            margin-bottom: 1rem;
        }}
        @keyframes overlayIn {{
            from {{ opacity: 0; }}
            to {{ opacity: 1; }}
        }}
        @keyframes overlayOut {{
            from {{ opacity: 1; }}
            to {{ opacity: 0; }}
        }}
        .card-overlay {{
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 0 1rem;
            text-align: center;
            border-radius: 0.5rem;
            background: rgba(37, 99, 235, 0.9);
            animation: overlayIn {hover}s ease-out forwards;
        }}
        .card-overlay.exiting {{
            animation: overlayOut {hover}s ease-in forwards;
        }}
        .projects {{
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(16px);
        }}
        .projects-grid {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }}
        .project-card {{
            background: #fff;
            color: #111827;
            border-radius: 0.5rem;
            overflow: hidden;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        }}
        .project-card img {{
            width: 100%;
            height: 12rem;
            object-fit: cover;
        }}
        .project-body {{
            padding: 1.5rem;
        }}
        .project-body p {{
            color: #4b5563;
        }}
        .contact-container {{
            max-width: 42rem;
        }}
        .contact-panel {{
            padding: 2rem;
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(16px);
        }}
        .contact-form {{
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }}
        .contact-form input,
        .contact-form textarea {{
            padding: 0.5rem 1rem;
            border: none;
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.2);
            color: #fff;
            transition: background 0.3s;
        }}
        .contact-form input:focus,
        .contact-form textarea:focus {{
            background: rgba(255, 255, 255, 0.3);
        }}
        .contact-form ::placeholder {{
            color: rgba(255, 255, 255, 0.7);
        }}
        .contact-submit {{
            text-align: center;
        }}
        .site-footer {{
            background: #1f2937;
            padding: 2rem 1rem;
            text-align: center;
        }}
        @media (max-width: 1024px) {{
            .burger-menu {{
                display: block;
            }}
            .nav-links {{
                display: none;
                width: 100%;
                flex-direction: column;
                gap: 0.5rem;
                margin-top: 1rem;
            }}
            .nav-links.mobile-menu-open {{
                display: flex;
            }}
            .hero-grid,
            .projects-grid {{
                grid-template-columns: 1fr;
            }}
            .services-grid {{
                grid-template-columns: repeat(2, 1fr);
            }}
        }}
        @media (max-width: 768px) {{
            .services-grid {{
                grid-template-columns: 1fr;
            }}
        }}
        "#,
        hover = hover_secs,
        scale = HOVER_SCALE,
    )
}
