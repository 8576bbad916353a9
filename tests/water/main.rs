
use interplay::{StateMachine, Transition};
use phases::{Phase, PhaseLog, Thermal};

#[test]
fn heat_frost_frost_cycles_through_three_phases() {
    let mut water = StateMachine::new(Phase::Liquid);

    assert_eq!(
        water.apply(Thermal::Heat),
        Transition::Changed {
            from: Phase::Liquid,
            to: Phase::Gas,
        }
    );
    assert_eq!(
        water.apply(Thermal::Frost),
        Transition::Changed {
            from: Phase::Gas,
            to: Phase::Liquid,
        }
    );
    assert_eq!(
        water.apply(Thermal::Frost),
        Transition::Changed {
            from: Phase::Liquid,
            to: Phase::Solid,
        }
    );
    assert_eq!(water.current(), Phase::Solid);
}

#[test]
fn frosting_ice_is_a_reported_no_op() {
    let mut water = StateMachine::new(Phase::Solid);

    let result = water.apply(Thermal::Frost);
    assert_eq!(
        result,
        Transition::NoTransition {
            state: Phase::Solid,
            trigger: Thermal::Frost,
        }
    );
    assert!(!result.changed());
    assert_eq!(water.current(), Phase::Solid);
}

#[test]
fn heating_steam_is_a_reported_no_op() {
    let mut water = StateMachine::new(Phase::Gas);
    assert!(!water.apply(Thermal::Heat).changed());
    assert_eq!(water.current(), Phase::Gas);
}

#[test]
fn transitions_are_deterministic() {
    for _ in 0..5 {
        let mut water = StateMachine::new(Phase::Liquid);
        assert_eq!(
            water.apply(Thermal::Heat),
            Transition::Changed {
                from: Phase::Liquid,
                to: Phase::Gas,
            }
        );
    }
}

#[test]
fn hooks_fire_exit_before_enter() {
    let mut water = StateMachine::new(Phase::Liquid);
    let mut log = PhaseLog::default();

    water.apply_with(Thermal::Heat, &mut log);
    assert_eq!(log.entries, vec!["leaving Liquid", "entering Gas"]);
}

#[test]
fn no_transition_fires_no_hooks() {
    let mut water = StateMachine::new(Phase::Solid);
    let mut log = PhaseLog::default();

    water.apply_with(Thermal::Frost, &mut log);
    assert!(log.entries.is_empty());
}

#[test]
fn machine_cycles_indefinitely() {
    let mut water = StateMachine::new(Phase::Solid);

    for _ in 0..3 {
        assert!(water.apply(Thermal::Heat).changed()); // Solid -> Liquid
        assert!(water.apply(Thermal::Heat).changed()); // Liquid -> Gas
        assert!(water.apply(Thermal::Frost).changed()); // Gas -> Liquid
        assert!(water.apply(Thermal::Frost).changed()); // Liquid -> Solid
    }
    assert_eq!(water.current(), Phase::Solid);
}
