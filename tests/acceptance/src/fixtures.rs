//! Style fixtures
//!
//! Source templates shared by the acceptance suites.

/// A CSS-in-JS template compiled under one selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFixture {
    pub name: &'static str,
    /// Scoping selector; empty for global source.
    pub selector: &'static str,
    pub source: &'static str,
}

impl StyleFixture {
    pub const fn scoped(name: &'static str, selector: &'static str, source: &'static str) -> Self {
        StyleFixture {
            name,
            selector,
            source,
        }
    }

    pub const fn global(name: &'static str, source: &'static str) -> Self {
        StyleFixture {
            name,
            selector: "",
            source,
        }
    }

    pub fn is_global(&self) -> bool {
        self.selector.is_empty()
    }
}

/// Keyframes referenced by the animation templates.
pub const TEST_KEYFRAMES: &str = "@keyframes testAnim{from{opacity:0}to{opacity:1}}";

/// Declarations of the `no-animation-prefixes` template.
pub const NO_ANIMATION_PREFIXES: &str =
    "label:no-animation-prefixes;animation:testAnim;animation-name:test;animation-delay:1s;";

/// Template used as the negative control.
pub const NEGATIVE_CONTROL: &str = "animation:something;&::placeholder{color:red}";

/// Fixture factory
pub struct StyleFixtures;

impl StyleFixtures {
    /// Every animation-family property, one declaration each.
    pub fn animation_family() -> StyleFixture {
        StyleFixture::scoped(
            "animation-family",
            ".anim",
            "animation: spin 1s linear infinite;
             animation-name: spin;
             animation-duration: 1s;
             animation-timing-function: ease-in;
             animation-delay: 0s;
             animation-iteration-count: 2;
             animation-direction: alternate;
             animation-fill-mode: both;
             animation-play-state: paused;",
        )
    }

    pub fn keyframes() -> StyleFixture {
        StyleFixture::global("keyframes", TEST_KEYFRAMES)
    }

    pub fn placeholder() -> StyleFixture {
        StyleFixture::scoped(
            "placeholder",
            ".field",
            "&::placeholder { color: red; }
             input::placeholder { opacity: 0.5 }",
        )
    }

    pub fn read_only() -> StyleFixture {
        StyleFixture::scoped("read-only", "input", "&:read-only { background: #eee }")
    }

    pub fn read_write() -> StyleFixture {
        StyleFixture::scoped(
            "read-write",
            "textarea",
            "&:read-write { border-color: blue }",
        )
    }

    pub fn negative_control() -> StyleFixture {
        StyleFixture::scoped("negative-control", ".control", NEGATIVE_CONTROL)
    }

    /// A component-sized template mixing suppressed and kept prefixes.
    pub fn component() -> StyleFixture {
        StyleFixture::scoped(
            "component",
            ".field",
            "label: field;
             display: flex;
             user-select: none;
             animation: pulse 2s;
             transition: opacity 0.2s;
             &::placeholder { color: gray; }
             &:read-only, &:read-write { cursor: grab; }
             &:focus { outline: none }
             @media (min-width: 600px) { width: fit-content; }
             @keyframes pulse { 0% { opacity: 1 } 50% { opacity: 0.4 } }",
        )
    }

    /// Fixtures every suite runs over.
    pub fn all() -> [StyleFixture; 7] {
        [
            Self::animation_family(),
            Self::keyframes(),
            Self::placeholder(),
            Self::read_only(),
            Self::read_write(),
            Self::negative_control(),
            Self::component(),
        ]
    }
}
