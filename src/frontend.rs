use std::rc::Rc;

use log::{error, info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{
    browser::{
        current_year, mount_attribute, mount_point, prefers_reduced_motion, use_reveal,
        BrowserScheduler, DocumentScroll,
    },
    config::{css_millis, parse_log_level, MotionConfig, DEFAULT_LOG_LEVEL},
    contact::{ContactForm, ContactStatus},
    content::{PhotoSource, Portfolio, Project, Skill},
    navigation::{ActiveSection, Section},
    reveal::Threshold,
    stagger::{Stagger, StaggeredItem},
};

/// Reveal state of the enclosing animated section, shared with its items.
#[derive(Clone, Copy, PartialEq)]
struct Revealed(bool);

fn navigate_on_click(on_navigate: &Callback<String>, target: &str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    let target = target.to_string();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        on_navigate.emit(target.clone());
    })
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    portfolio: Rc<Portfolio>,
    active: ActiveSection,
    on_navigate: Callback<String>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let home = Section::Home;

    html! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <a
                    class="brand"
                    href={home.anchor()}
                    onclick={navigate_on_click(&props.on_navigate, home.id())}
                >
                    {props.portfolio.profile.brand()}
                </a>
                <div class="nav-links">
                    { for props.portfolio.nav.iter().map(|item| html! {
                        <a
                            key={item.target.clone()}
                            href={format!("#{}", item.target)}
                            class={classes!(
                                "nav-link",
                                props.active.is_active(&item.target).then_some("is-active")
                            )}
                            aria-current={props.active.is_active(&item.target).then_some("true")}
                            onclick={navigate_on_click(&props.on_navigate, &item.target)}
                        >
                            {item.label.clone()}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct AnimatedSectionProps {
    id: AttrValue,
    title: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(AnimatedSection)]
fn animated_section(props: &AnimatedSectionProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), Threshold::new(motion.reveal_threshold));
    let style = format!("transition-duration: {};", css_millis(motion.reveal_duration));

    html! {
        <section id={props.id.clone()} ref={node} class="section">
            <div class="container">
                <h2 class="section-title">{props.title.clone()}</h2>
                <div class={classes!("reveal", revealed.then_some("is-revealed"))} style={style}>
                    <ContextProvider<Revealed> context={Revealed(revealed)}>
                        { for props.children.iter() }
                    </ContextProvider<Revealed>>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    portfolio: Rc<Portfolio>,
    on_navigate: Callback<String>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let photo = use_state_eq(PhotoSource::default);
    let profile = &props.portfolio.profile;

    let onerror = {
        let photo = photo.clone();
        Callback::from(move |_: Event| {
            if *photo == PhotoSource::Primary {
                warn!("profile photo failed to load; using placeholder");
            }
            photo.set((*photo).after_load_error());
        })
    };

    let projects = Section::Projects;

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-copy">
                <img
                    class="hero-photo"
                    src={photo.src(profile)}
                    alt={profile.name.clone()}
                    onerror={onerror}
                />
                <h1 class="hero-name">{format!("Hello, I'm {}", profile.name)}</h1>
                <p class="hero-title">{profile.title.clone()}</p>
                <a
                    class="button hero-cta"
                    href={projects.anchor()}
                    onclick={navigate_on_click(&props.on_navigate, projects.id())}
                >
                    {"Explore My Work →"}
                </a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioProps {
    portfolio: Rc<Portfolio>,
}

#[function_component(About)]
fn about(props: &PortfolioProps) -> Html {
    let profile = &props.portfolio.profile;

    html! {
        <AnimatedSection id={Section::About.id()} title="About Me">
            <div class="card">
                <p class="lead">{profile.bio.clone()}</p>
                <p class="lead">{profile.about.clone()}</p>
                <div class="social-links">
                    <a href={profile.github_url()} target="_blank" rel="noopener noreferrer" title="GitHub">
                        {"GitHub"}
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                    <a href={profile.linkedin.clone()} target="_blank" rel="noopener noreferrer" title="LinkedIn">
                        {"LinkedIn"}
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: Skill,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let Revealed(revealed) = use_context::<Revealed>().unwrap_or(Revealed(true));
    let skill = &props.skill;
    let style = format!(
        "width: {}; transition: width {} ease-out {};",
        skill.width(revealed),
        css_millis(motion.skill_fill),
        css_millis(motion.skill_fill_delay),
    );

    html! {
        <div class="skill">
            <div class="skill-header">
                <span class="skill-name">{skill.name.clone()}</span>
                <span class={classes!("skill-level", skill.color.class())}>{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={style} />
            </div>
        </div>
    }
}

#[function_component(Skills)]
fn skills(props: &PortfolioProps) -> Html {
    let portfolio = &props.portfolio;

    html! {
        <AnimatedSection id={Section::Skills.id()} title="Technical Skills">
            <div class="grid two-up">
                <div class="card">
                    <h3 class="card-title">{"Core Competencies"}</h3>
                    { for portfolio.skills.iter().map(|skill| html! {
                        <SkillBar key={skill.name.clone()} skill={skill.clone()} />
                    }) }
                </div>
                <div class="card">
                    <h3 class="card-title">{"What I Bring to the Table"}</h3>
                    <ul class="highlights">
                        { for portfolio.highlights.iter().map(|line| html! {
                            <li><span class="star" aria-hidden="true">{"★"}</span>{line.clone()}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let Revealed(parent_visible) = use_context::<Revealed>().unwrap_or(Revealed(true));
    let rerender = use_force_update();
    let item = {
        let index = props.index;
        let stagger = Stagger::new(motion.stagger_interval);
        use_mut_ref(move || StaggeredItem::<BrowserScheduler>::new(index, stagger))
    };

    {
        let item = item.clone();
        use_effect_with(parent_visible, move |visible| {
            item.borrow_mut().parent_visibility_changed(*visible, &BrowserScheduler, move || {
                rerender.force_update()
            });
            move || item.borrow_mut().teardown()
        });
    }

    let revealed = item.borrow().is_revealed();

    let project = &props.project;
    let style = format!("transition-duration: {};", css_millis(motion.card_transition));

    html! {
        <div class={classes!("card", "project-card", revealed.then_some("is-revealed"))} style={style}>
            <h3 class="project-title">{project.title.clone()}</h3>
            <p class="project-description">{project.description.clone()}</p>
            <div class="tags">
                { for project.technologies.iter().map(|tech| html! {
                    <span class="tag">{tech.clone()}</span>
                }) }
            </div>
            <a class="repo-link" href={project.link.clone()} target="_blank" rel="noopener noreferrer">
                {"View Repository"}
                <span class="arrow" aria-hidden="true">{"→"}</span>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
        </div>
    }
}

#[function_component(Projects)]
fn projects(props: &PortfolioProps) -> Html {
    html! {
        <AnimatedSection id={Section::Projects.id()} title="Featured Projects">
            <div class="grid three-up">
                { for props.portfolio.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.title.clone()} index={index} project={project.clone()} />
                }) }
            </div>
        </AnimatedSection>
    }
}

#[function_component(Contact)]
fn contact(props: &PortfolioProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let status = use_state_eq(ContactStatus::default);
    let form = {
        let status = status.clone();
        use_mut_ref(move || {
            ContactForm::<BrowserScheduler>::new(motion.confirmation, move |next| status.set(next))
        })
    };

    {
        let form = form.clone();
        use_effect_with((), move |_| move || form.borrow_mut().teardown());
    }

    let onsubmit = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        form.borrow_mut().submit(&BrowserScheduler);
    });

    let profile = &props.portfolio.profile;

    html! {
        <AnimatedSection id={Section::Contact.id()} title="Get In Touch">
            <div class="card narrow">
                <h3 class="card-title">{"Direct Message"}</h3>
                <p class="lead centered">{"I'm currently open to new opportunities. Feel free to reach out directly!"}</p>
                <form class="contact-form" onsubmit={onsubmit}>
                    <label for="name">{"Name"}</label>
                    <input id="name" name="name" type="text" required=true />
                    <label for="email">{"Email"}</label>
                    <input id="email" name="email" type="email" required=true />
                    <label for="message">{"Message"}</label>
                    <textarea id="message" name="message" rows="4" required=true />
                    <button
                        type="submit"
                        class={classes!("button", "submit", status.disabled().then_some("is-sent"))}
                        disabled={status.disabled()}
                    >
                        {status.button_label()}
                    </button>
                </form>
                <div class="direct">
                    <p>{"Or, reach out directly:"}</p>
                    <a href={profile.mailto()}>{profile.email.clone()}</a>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Footer)]
fn footer(props: &PortfolioProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{format!("© {} {}. All rights reserved.", current_year(), props.portfolio.profile.name)}</p>
                <p class="muted">{"Designed and built with Rust, Yew and WebAssembly."}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    portfolio: Rc<Portfolio>,
    motion: MotionConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let active = use_state(ActiveSection::default);

    let on_navigate = {
        let active = active.clone();
        Callback::from(move |target: String| {
            let mut next = (*active).clone();
            next.navigate_to(&target, &DocumentScroll);
            active.set(next);
        })
    };

    let portfolio = props.portfolio.clone();

    html! {
        <ContextProvider<MotionConfig> context={props.motion}>
            <a class="skip-link" href={Section::About.anchor()}>{"Skip to content"}</a>
            <Navbar
                portfolio={portfolio.clone()}
                active={(*active).clone()}
                on_navigate={on_navigate.clone()}
            />
            <main>
                <Hero portfolio={portfolio.clone()} on_navigate={on_navigate} />
                <About portfolio={portfolio.clone()} />
                <Skills portfolio={portfolio.clone()} />
                <Projects portfolio={portfolio.clone()} />
                <Contact portfolio={portfolio.clone()} />
            </main>
            <Footer portfolio={portfolio} />
        </ContextProvider<MotionConfig>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let mount = mount_point();
    let level = parse_log_level(mount_attribute(mount.as_ref(), "log-level"), DEFAULT_LOG_LEVEL);
    let _ = console_log::init_with_level(level);

    let mut motion = MotionConfig::from_attributes(|name| mount_attribute(mount.as_ref(), name));
    if prefers_reduced_motion() {
        info!("reduced motion requested; animations disabled");
        motion = motion.reduced();
    }

    let portfolio = match Portfolio::embedded() {
        Ok(portfolio) => Rc::new(portfolio),
        Err(err) => {
            error!("failed to load portfolio content: {err}");
            return;
        }
    };
    info!("rendering portfolio for {}", portfolio.profile.name);

    let props = AppProps { portfolio, motion };
    match mount {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            warn!("missing #app mount point; rendering into <body>");
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
