use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn color_scheme_adds_dark_class_once() {
    let dark = ColorScheme { dark: true };
    assert_eq!(dark.apply_to(""), "dark");
    assert_eq!(dark.apply_to("scroll-smooth dark"), "scroll-smooth dark");
    assert_eq!(dark.apply_to("scroll-smooth"), "scroll-smooth dark");
}

#[test]
fn color_scheme_removes_dark_class() {
    let light = ColorScheme { dark: false };
    assert_eq!(light.apply_to("dark scroll-smooth"), "scroll-smooth");
    assert_eq!(light.apply_to(""), "");
}

#[test]
fn gradient_sets_individual_style_properties() {
    let properties = GradientBackdrop::default().properties();
    let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["background", "background-size", "animation"]);
    assert!(properties[0].1.contains("#00F5FF33"));
    assert!(properties[0].1.contains("#FF00A826"));
    assert!(properties[2].1.starts_with("gradient-drift"));
    assert!(properties.iter().all(|(_, value)| !value.contains(';')));
}

#[test]
fn effects_mount_as_no_ops_off_browser() {
    let reveal = ScrollReveal::default();
    let scheme = ColorScheme { dark: true };
    let backdrop = GradientBackdrop::default();
    let effects: [&dyn PresentationEffect; 3] = [&reveal, &scheme, &backdrop];
    for effect in effects {
        assert!(effect.mount().is_ok());
    }
    assert_eq!(mount_all(&effects).len(), 3);
    assert!(!system_prefers_dark());
}

#[test]
fn dropping_a_mounted_handle_runs_its_teardown_once() {
    let torn_down = Rc::new(Cell::new(0));
    let counter = torn_down.clone();
    let mounted = Mounted::with_teardown(move || counter.set(counter.get() + 1));

    assert_eq!(torn_down.get(), 0);
    drop(mounted);
    assert_eq!(torn_down.get(), 1);
}

#[test]
fn slot_mounts_once_however_often_it_is_asked() {
    let mounts = Rc::new(Cell::new(0));
    let torn_down = Rc::new(Cell::new(0));
    let mut slot = EffectSlot::default();

    let mount = || {
        mounts.set(mounts.get() + 1);
        let torn_down = torn_down.clone();
        vec![Mounted::with_teardown(move || torn_down.set(torn_down.get() + 1))]
    };

    assert!(!slot.mount_when_ready(false, mount));
    assert!(slot.mount_when_ready(true, mount));
    for _ in 0..10 {
        assert!(!slot.mount_when_ready(true, mount));
    }
    assert_eq!(mounts.get(), 1);
    assert_eq!(torn_down.get(), 0);

    slot.clear();
    assert_eq!(torn_down.get(), 1);
    assert!(!slot.is_mounted());
    assert!(slot.mount_when_ready(true, mount));
    assert_eq!(mounts.get(), 2);
}

#[test]
fn failed_effects_are_left_out_of_the_handles() {
    struct Broken;

    impl PresentationEffect for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn mount(&self) -> Result<Mounted, EffectError> {
            Err(EffectError::NoDocument)
        }
    }

    let scheme = ColorScheme { dark: false };
    assert_eq!(mount_all(&[&Broken, &scheme]).len(), 1);
}
