// DOM/CSS contract between the page markup and the front-end.
//
// Renaming any of these in the markup silently disables the matching
// behavior.

// Element ids
pub const CANVAS_ID: &str = "three-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_PROFILE_ID: &str = "loading-profile-data";
pub const MASCOT_ID: &str = "mascot-octopus";
pub const MASCOT_CANVAS_ID: &str = "rive-octopus";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";

// Selectors
pub const SECTION_SELECTOR: &str = ".section";
pub const MASCOT_SECTION_SELECTOR: &str = ".section[data-section]";
pub const SECTION_TITLE_SELECTOR: &str = ".section-title";
pub const SECTION_CONTENT_SELECTOR: &str =
    ".about-grid, .services-grid, .projects-grid, .contact-container";
pub const CARD_SELECTOR: &str = ".about-card, .service-card, .project-card";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const SCROLL_DOT_SELECTOR: &str = ".scroll-dot";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
pub const HERO_BUTTONS_SELECTOR: &str = ".hero-buttons";
pub const CLICK_SOUND_SELECTOR: &str = "[data-sound=\"click\"]";
pub const MOTION_PATH_SELECTOR: &str = "[data-animate=\"motion-path\"]";

// Classes and attributes
pub const ACTIVE_CLASS: &str = "active";
pub const FLOATING_CLASS: &str = "floating-element";
pub const SECTION_ATTR: &str = "data-section";

// Mascot asset
pub const MASCOT_ASSET: &str = "octopus_loop.riv";
pub const MASCOT_STATE_MACHINE: &str = "State Machine 1";

// Script globals detected at boot
pub const GSAP_GLOBAL: &str = "gsap";
pub const SCROLL_TRIGGER_GLOBAL: &str = "ScrollTrigger";
pub const MOTION_PATH_GLOBAL: &str = "MotionPathPlugin";
pub const RIVE_GLOBAL: &str = "rive";

// Button glow while hovered / idle
pub const BUTTON_GLOW_HOVER: &str = "0 8px 32px #00d4ff55";
pub const BUTTON_GLOW_IDLE: &str = "0 2px 12px #00d4ff22";
