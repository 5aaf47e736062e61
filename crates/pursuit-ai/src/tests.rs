#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use glam::{Quat, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use pursuit_core::config::AgentConfig;
    use pursuit_core::constants::*;
    use pursuit_core::enums::{AgentMode, ContactTag};
    use pursuit_core::events::AgentEvent;
    use pursuit_core::nav::{Navigator, PresentationSink, SurfaceSampler};
    use pursuit_core::state::OverlayColor;
    use pursuit_core::types::{look_rotation, Pose};

    use crate::arrival::NavStatus;
    use crate::controller::{AgentController, TickInput};
    use crate::motion::{face_velocity, locomotion_blend, rotate_towards};
    use crate::overlay::range_spheres;
    use crate::perception::{PerceptionState, Transition};
    use crate::wander::{random_in_unit_sphere, WanderPlanner, WanderRefresh};

    // ---- Test doubles ----

    #[derive(Default)]
    struct RecordingNavigator {
        position: Vec3,
        velocity: Vec3,
        max_speed: f32,
        pending: bool,
        has_path: bool,
        remaining: f32,
        stopping: f32,
        destinations: Vec<Vec3>,
        resets: usize,
    }

    impl RecordingNavigator {
        fn at(position: Vec3) -> Self {
            Self {
                position,
                max_speed: NAV_DEFAULT_SPEED,
                ..Default::default()
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn set_destination(&mut self, point: Vec3) -> bool {
            self.destinations.push(point);
            self.has_path = true;
            self.remaining = (point - self.position).length();
            true
        }
        fn reset_path(&mut self) {
            self.has_path = false;
            self.remaining = 0.0;
            self.resets += 1;
        }
        fn is_path_pending(&self) -> bool {
            self.pending
        }
        fn has_active_path(&self) -> bool {
            self.has_path
        }
        fn remaining_distance(&self) -> f32 {
            self.remaining
        }
        fn velocity(&self) -> Vec3 {
            self.velocity
        }
        fn max_speed(&self) -> f32 {
            self.max_speed
        }
        fn stopping_distance(&self) -> f32 {
            self.stopping
        }
        fn set_stopping_distance(&mut self, distance: f32) {
            self.stopping = distance;
        }
        fn position(&self) -> Vec3 {
            self.position
        }
    }

    /// Every point is navigable.
    struct OpenSurface;

    impl SurfaceSampler for OpenSurface {
        fn sample(&self, near: Vec3, _max_distance: f32) -> Option<Vec3> {
            Some(near)
        }
    }

    /// No point is navigable; counts queries.
    #[derive(Default)]
    struct VoidSurface {
        queries: Cell<u32>,
    }

    impl SurfaceSampler for VoidSurface {
        fn sample(&self, _near: Vec3, _max_distance: f32) -> Option<Vec3> {
            self.queries.set(self.queries.get() + 1);
            None
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        values: Vec<(f32, f32)>,
    }

    impl PresentationSink for RecordingSink {
        fn set_blend(&mut self, value: f32, damp_time: f32, _dt: f32) {
            self.values.push((value, damp_time));
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn settled() -> NavStatus {
        NavStatus::default()
    }

    fn travelling() -> NavStatus {
        NavStatus {
            has_path: true,
            remaining_distance: 10.0,
            velocity: Vec3::new(2.0, 0.0, 0.0),
            max_speed: NAV_DEFAULT_SPEED,
            ..Default::default()
        }
    }

    const DT: f32 = 1.0 / 60.0;

    // ---- Perception ----

    #[test]
    fn test_hysteresis_acquire_and_lose() {
        let mut p = PerceptionState::default();
        assert_eq!(p.update(40.0 * 40.0, 30.0, 35.0), Transition::None);
        assert!(!p.is_chasing());
        assert_eq!(p.update(30.0 * 30.0, 30.0, 35.0), Transition::Acquired);
        assert!(p.is_chasing());
        assert_eq!(p.update(34.9 * 34.9, 30.0, 35.0), Transition::None);
        assert!(p.is_chasing());
        assert_eq!(p.update(35.0 * 35.0, 30.0, 35.0), Transition::Lost);
        assert!(!p.is_chasing());
    }

    #[test]
    fn test_hysteresis_band_never_flips() {
        let band = [30.01f32, 31.0, 32.5, 33.3, 34.99];
        for start_chasing in [false, true] {
            let mut p = PerceptionState::default();
            if start_chasing {
                p.update(0.0, 30.0, 35.0);
            }
            for d in band {
                assert_eq!(p.update(d * d, 30.0, 35.0), Transition::None);
                assert_eq!(p.is_chasing(), start_chasing);
            }
        }
    }

    #[test]
    fn test_hysteresis_flips_at_most_once_per_update() {
        let mut p = PerceptionState::default();
        // A distance that satisfies both thresholds still only acquires.
        assert_eq!(p.update(0.0, 30.0, 0.0), Transition::Acquired);
        assert!(p.is_chasing());
    }

    // ---- Arrival ----

    #[test]
    fn test_arrival_requires_no_pending_path() {
        let status = NavStatus {
            path_pending: true,
            ..settled()
        };
        assert!(!status.has_arrived());
        assert!(settled().has_arrived());
    }

    #[test]
    fn test_arrival_uses_stopping_distance_with_floor() {
        let mut status = NavStatus {
            remaining_distance: 0.09,
            ..settled()
        };
        assert!(status.has_arrived());
        status.remaining_distance = 0.2;
        assert!(!status.has_arrived());
        status.stopping_distance = 3.0;
        status.remaining_distance = 2.9;
        assert!(status.has_arrived());
    }

    #[test]
    fn test_arrival_waits_for_deceleration_on_path() {
        let mut status = NavStatus {
            has_path: true,
            stopping_distance: 3.0,
            remaining_distance: 1.0,
            velocity: Vec3::new(0.5, 0.0, 0.0),
            ..Default::default()
        };
        assert!(!status.has_arrived());
        status.velocity = Vec3::new(0.05, 0.0, 0.0);
        assert!(status.has_arrived());
        status.has_path = false;
        status.velocity = Vec3::new(5.0, 0.0, 0.0);
        assert!(status.has_arrived(), "velocity is ignored without a path");
    }

    // ---- Wander ----

    #[test]
    fn test_unit_sphere_samples_stay_inside() {
        let mut rng = rng();
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_wander_goal_within_radius_of_center() {
        let center = Vec3::new(5.0, 0.0, -3.0);
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);
        for i in 0..200 {
            let now = i as f64 * 10.0;
            match planner.maybe_refresh(now, center, &travelling(), &OpenSurface, &mut rng) {
                WanderRefresh::NewGoal(goal) => {
                    assert!((goal - center).length() <= 15.0 + 1e-4);
                    assert!(planner.has_goal());
                    assert_eq!(planner.current_goal(), Some(goal));
                }
                other => panic!("expected a new goal, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wander_failure_is_bounded_and_leaves_goal_unset() {
        let center = Vec3::new(1.0, 0.0, 1.0);
        let surface = VoidSurface::default();
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);

        for tick in 1..=5u32 {
            let result = planner.maybe_refresh(0.0, center, &travelling(), &surface, &mut rng);
            assert_eq!(result, WanderRefresh::SampleFailed { fallback: center });
            assert_eq!(surface.queries.get(), tick * WANDER_SAMPLE_ATTEMPTS);
            assert!(!planner.has_goal());
            assert_eq!(planner.current_goal(), Some(center));
        }
    }

    #[test]
    fn test_wander_reschedules_within_wait_window() {
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);
        for i in 0..100 {
            let now = 100.0 * i as f64;
            planner.maybe_refresh(now, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
            let wait = planner.next_refresh_time() - now;
            assert!((1.5..=3.5).contains(&wait), "wait {wait} out of window");
        }

        // Failed refreshes reschedule too.
        let now = 50_000.0;
        planner.maybe_refresh(now, Vec3::ZERO, &travelling(), &VoidSurface::default(), &mut rng);
        let wait = planner.next_refresh_time() - now;
        assert!((1.5..=3.5).contains(&wait));
    }

    #[test]
    fn test_wander_not_due_keeps_goal() {
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);
        let first = planner.maybe_refresh(0.0, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
        assert!(matches!(first, WanderRefresh::NewGoal(_)));
        let again = planner.maybe_refresh(1.0, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
        assert_eq!(again, WanderRefresh::Unchanged);
    }

    #[test]
    fn test_wander_refreshes_on_arrival_before_timer() {
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);
        planner.maybe_refresh(0.0, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
        let result = planner.maybe_refresh(0.5, Vec3::ZERO, &settled(), &OpenSurface, &mut rng);
        assert!(matches!(result, WanderRefresh::NewGoal(_)));
    }

    #[test]
    fn test_wander_invalidate_forces_refresh() {
        let mut rng = rng();
        let mut planner = WanderPlanner::new(15.0, 1.5, 3.5);
        planner.maybe_refresh(0.0, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
        planner.invalidate();
        let result = planner.maybe_refresh(0.1, Vec3::ZERO, &travelling(), &OpenSurface, &mut rng);
        assert!(matches!(result, WanderRefresh::NewGoal(_)));
    }

    // ---- Blend & facing ----

    #[test]
    fn test_blend_is_normalized_and_clamped() {
        let speeds = [0.0f32, 0.5, 3.5, 7.0, 1000.0];
        let max_speeds = [0.01f32, 1.0, 3.5, 100.0];
        for s in speeds {
            for m in max_speeds {
                let blend = locomotion_blend(Vec3::new(s, 0.0, 0.0), m);
                assert!((0.0..=1.0).contains(&blend), "blend {blend} for {s}/{m}");
            }
        }
        assert!((locomotion_blend(Vec3::new(0.0, 0.0, 1.75), 3.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_blend_zero_for_tiny_max_speed() {
        assert_eq!(locomotion_blend(Vec3::new(5.0, 0.0, 0.0), 1e-3), 0.0);
        assert_eq!(locomotion_blend(Vec3::new(5.0, 0.0, 0.0), 0.0), 0.0);
        assert_eq!(locomotion_blend(Vec3::new(5.0, 0.0, 0.0), -2.0), 0.0);
    }

    #[test]
    fn test_rotate_towards_is_rate_limited() {
        let target = look_rotation(Vec3::X);
        let step = rotate_towards(Quat::IDENTITY, target, 9.0);
        let turned = Quat::IDENTITY.angle_between(step).to_degrees();
        assert!((turned - 9.0).abs() < 0.05, "turned {turned} degrees");

        let done = rotate_towards(step, target, 720.0);
        assert!(((done * Vec3::Z) - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_face_velocity_turns_gradually() {
        let mut orientation = Quat::IDENTITY;
        let velocity = Vec3::new(-3.0, 0.5, 0.0);
        // 540 deg/s at 60 Hz is 9 degrees per tick; a 90 degree turn takes 10 ticks.
        for _ in 0..9 {
            orientation = face_velocity(orientation, velocity, 540.0, DT);
            assert!(orientation.angle_between(look_rotation(Vec3::NEG_X)) > 1e-3);
        }
        orientation = face_velocity(orientation, velocity, 540.0, DT);
        let forward = orientation * Vec3::Z;
        assert!((forward - Vec3::NEG_X).length() < 1e-3, "forward {forward:?}");
    }

    #[test]
    fn test_face_velocity_ignores_rest_and_vertical_motion() {
        let start = look_rotation(Vec3::X);
        assert_eq!(face_velocity(start, Vec3::ZERO, 540.0, DT), start);
        assert_eq!(face_velocity(start, Vec3::new(0.001, 0.0, 0.0), 540.0, DT), start);
        assert_eq!(face_velocity(start, Vec3::new(0.0, 9.0, 0.0), 540.0, DT), start);
    }

    // ---- Controller ----

    fn controller_at(position: Vec3) -> AgentController {
        AgentController::new("Enemy", AgentConfig::default(), Pose::at(position))
    }

    #[test]
    fn test_no_navigator_idles_with_zero_blend() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut sink = RecordingSink::default();
        let mut events = Vec::new();
        let input = TickInput::new(0.0, DT).with_target(&Some(Vec3::new(1.0, 0.0, 0.0)));
        let report = agent.tick(&input, None, &OpenSurface, &mut sink, &mut rng(), &mut events);
        assert_eq!(report.mode, AgentMode::Idle);
        assert_eq!(report.blend, 0.0);
        assert_eq!(sink.values, vec![(0.0, DEFAULT_BLEND_DAMP_TIME)]);
        assert!(!agent.is_chasing());
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_target_wanders_around_spawn() {
        let spawn = Vec3::new(10.0, 0.0, 10.0);
        let mut agent = controller_at(spawn);
        let mut nav = RecordingNavigator::at(spawn);
        let mut sink = RecordingSink::default();
        let mut events = Vec::new();
        let report = agent.tick(
            &TickInput::new(0.0, DT),
            Some(&mut nav),
            &OpenSurface,
            &mut sink,
            &mut rng(),
            &mut events,
        );
        assert_eq!(report.mode, AgentMode::Wandering);
        assert_eq!(nav.destinations.len(), 1);
        assert!((nav.destinations[0] - spawn).length() <= DEFAULT_PATROL_RADIUS + 1e-4);
        assert!(matches!(events[0], AgentEvent::WanderGoalSelected { .. }));
    }

    #[test]
    fn test_explicit_wander_center_overrides_spawn() {
        let center = Vec3::new(-50.0, 0.0, 0.0);
        let config = AgentConfig {
            wander_center: Some(center),
            ..Default::default()
        };
        let mut agent = AgentController::new("Enemy", config, Pose::at(Vec3::ZERO));
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        agent.tick(
            &TickInput::new(0.0, DT),
            Some(&mut nav),
            &OpenSurface,
            &mut RecordingSink::default(),
            &mut rng(),
            &mut Vec::new(),
        );
        assert_eq!(agent.wander_center(), center);
        assert!((nav.destinations[0] - center).length() <= DEFAULT_PATROL_RADIUS + 1e-4);
    }

    #[test]
    fn test_failed_wander_issues_no_destination() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        let surface = VoidSurface::default();
        let mut events = Vec::new();
        let mut rng = rng();
        for i in 0..20 {
            agent.tick(
                &TickInput::new(i as f64 * DT as f64, DT),
                Some(&mut nav),
                &surface,
                &mut RecordingSink::default(),
                &mut rng,
                &mut events,
            );
        }
        assert!(nav.destinations.is_empty());
        assert!(!agent.wander().has_goal());
        assert_eq!(surface.queries.get(), 20 * WANDER_SAMPLE_ATTEMPTS);
        assert!(events
            .iter()
            .all(|e| matches!(e, AgentEvent::WanderSampleFailed { .. })));
    }

    #[test]
    fn test_holds_inside_stop_range() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        nav.has_path = true;
        let input = TickInput::new(0.0, DT).with_target(&Some(Vec3::new(2.0, 0.0, 0.0)));
        let report = agent.tick(
            &input,
            Some(&mut nav),
            &OpenSurface,
            &mut RecordingSink::default(),
            &mut rng(),
            &mut Vec::new(),
        );
        assert_eq!(report.mode, AgentMode::Holding);
        assert!(report.is_chasing);
        assert!(nav.destinations.is_empty());
        assert_eq!(nav.resets, 1);
    }

    #[test]
    fn test_chase_uses_planar_distance() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        // 25 m away on the ground, 100 m above: still inside detection range.
        let target = Vec3::new(25.0, 100.0, 0.0);
        let input = TickInput::new(0.0, DT).with_target(&Some(target));
        let report = agent.tick(
            &input,
            Some(&mut nav),
            &OpenSurface,
            &mut RecordingSink::default(),
            &mut rng(),
            &mut Vec::new(),
        );
        assert_eq!(report.mode, AgentMode::Chasing);
        assert_eq!(nav.destinations, vec![target]);
    }

    #[test]
    fn test_blend_forwarded_with_damp_time() {
        let config = AgentConfig {
            blend_damp_time: 0.25,
            ..Default::default()
        };
        let mut agent = AgentController::new("Enemy", config, Pose::default());
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        nav.velocity = Vec3::new(0.0, 0.0, NAV_DEFAULT_SPEED / 2.0);
        let mut sink = RecordingSink::default();
        let report = agent.tick(
            &TickInput::new(0.0, DT),
            Some(&mut nav),
            &OpenSurface,
            &mut sink,
            &mut rng(),
            &mut Vec::new(),
        );
        assert!((report.blend - 0.5).abs() < 1e-6);
        assert_eq!(sink.values.len(), 1);
        assert!((sink.values[0].0 - 0.5).abs() < 1e-6);
        assert_eq!(sink.values[0].1, 0.25);
    }

    #[test]
    fn test_manual_rotation_can_be_disabled() {
        let config = AgentConfig {
            manual_rotate: false,
            ..Default::default()
        };
        let mut agent = AgentController::new("Enemy", config, Pose::default());
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        nav.velocity = Vec3::new(3.0, 0.0, 0.0);
        agent.tick(
            &TickInput::new(0.0, DT),
            Some(&mut nav),
            &OpenSurface,
            &mut RecordingSink::default(),
            &mut rng(),
            &mut Vec::new(),
        );
        assert_eq!(agent.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_apply_config_clamps_and_mirrors_stop_range() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        agent.bind(&mut nav);
        assert_eq!(nav.stopping, DEFAULT_STOP_RANGE);

        let config = AgentConfig {
            detection_range: 10.0,
            lost_range: 5.0,
            stop_range: 1.5,
            patrol_radius: 4.0,
            ..Default::default()
        };
        agent.apply_config(config, Some(&mut nav));
        assert_eq!(nav.stopping, 1.5);
        assert_eq!(agent.config().lost_range, 11.0);
        assert_eq!(agent.wander().radius(), 4.0);
    }

    // ---- Contacts ----

    #[test]
    fn test_player_contact_latches_once() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut events = Vec::new();
        assert!(agent.on_contact(&ContactTag::Player, &mut events));
        assert!(agent.has_registered_hit());
        assert!(!agent.on_contact(&ContactTag::Player, &mut events));
        assert!(!agent.on_contact(&ContactTag::Player, &mut events));
        assert!(agent.has_registered_hit());
        let hits = events
            .iter()
            .filter(|e| matches!(e, AgentEvent::HitRegistered { .. }))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_gold_and_other_contacts_never_latch() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut events = Vec::new();
        assert!(!agent.on_contact(&ContactTag::Gold, &mut events));
        assert!(!agent.on_contact(&ContactTag::from_name("Wall"), &mut events));
        assert!(!agent.has_registered_hit());
        assert_eq!(
            events[0],
            AgentEvent::ContactObserved {
                agent: "Enemy".to_string(),
                tag: ContactTag::Gold
            }
        );
        assert_eq!(events.len(), 2);
    }

    // ---- End-to-end decision scenario ----

    #[test]
    fn test_chase_wander_latch_scenario() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        agent.bind(&mut nav);
        let mut sink = RecordingSink::default();
        let mut events = Vec::new();
        let mut rng = rng();
        let mut now = 0.0f64;

        let mut step = |agent: &mut AgentController,
                        nav: &mut RecordingNavigator,
                        target: Vec3,
                        events: &mut Vec<AgentEvent>| {
            now += DT as f64;
            let input = TickInput::new(now, DT).with_target(&Some(target));
            agent.tick(&input, Some(nav), &OpenSurface, &mut sink, &mut rng, events)
        };

        // 40 m: outside detection, wander.
        let report = step(&mut agent, &mut nav, Vec3::new(40.0, 0.0, 0.0), &mut events);
        assert_eq!(report.mode, AgentMode::Wandering);
        assert!(!report.is_chasing);
        assert_eq!(nav.destinations.len(), 1);

        // 25 m: acquire and path to the target.
        let target = Vec3::new(25.0, 0.0, 0.0);
        let report = step(&mut agent, &mut nav, target, &mut events);
        assert!(report.is_chasing);
        assert_eq!(report.mode, AgentMode::Chasing);
        assert_eq!(nav.destinations.last(), Some(&target));

        // 33 m: inside the band, still chasing.
        let report = step(&mut agent, &mut nav, Vec3::new(33.0, 0.0, 0.0), &mut events);
        assert!(report.is_chasing);

        // 36 m: lost, wander resumes with a fresh goal on the same tick.
        let before = nav.destinations.len();
        let report = step(&mut agent, &mut nav, Vec3::new(36.0, 0.0, 0.0), &mut events);
        assert!(!report.is_chasing);
        assert_eq!(report.mode, AgentMode::Wandering);
        assert_eq!(nav.destinations.len(), before + 1);
        let wander_goal = *nav.destinations.last().unwrap();
        assert!(wander_goal.length() <= DEFAULT_PATROL_RADIUS + 1e-4);

        // Player contact latches.
        assert!(agent.on_contact(&ContactTag::Player, &mut events));

        // 10 m: chasing again, but no destination and the active path is cleared.
        let before = nav.destinations.len();
        let resets = nav.resets;
        let report = step(&mut agent, &mut nav, Vec3::new(10.0, 0.0, 0.0), &mut events);
        assert!(report.is_chasing);
        assert_eq!(report.mode, AgentMode::Frozen);
        assert_eq!(nav.destinations.len(), before);
        assert_eq!(nav.resets, resets + 1);

        // Never resumes the chase.
        for d in [8.0, 5.0, 20.0] {
            step(&mut agent, &mut nav, Vec3::new(d, 0.0, 0.0), &mut events);
        }
        assert_eq!(nav.destinations.len(), before);

        let kinds: Vec<_> = events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    AgentEvent::ChaseStarted { .. } | AgentEvent::ChaseLost { .. }
                )
            })
            .collect();
        assert_eq!(kinds.len(), 3, "acquire, lose, re-acquire: {kinds:?}");
    }

    #[test]
    fn test_frozen_agent_leaves_pending_path_alone() {
        let mut agent = controller_at(Vec3::ZERO);
        let mut nav = RecordingNavigator::at(Vec3::ZERO);
        agent.on_contact(&ContactTag::Player, &mut Vec::new());
        nav.has_path = true;
        nav.pending = true;
        let input = TickInput::new(0.0, DT).with_target(&Some(Vec3::new(5.0, 0.0, 0.0)));
        let report = agent.tick(
            &input,
            Some(&mut nav),
            &OpenSurface,
            &mut RecordingSink::default(),
            &mut rng(),
            &mut Vec::new(),
        );
        assert_eq!(report.mode, AgentMode::Frozen);
        assert_eq!(nav.resets, 0);
    }

    // ---- Overlay ----

    #[test]
    fn test_overlay_spheres_follow_config() {
        let config = AgentConfig::default();
        let spheres = range_spheres(Vec3::new(1.0, 0.0, 1.0), Vec3::ZERO, &config);
        assert_eq!(spheres[0].color, OverlayColor::Yellow);
        assert_eq!(spheres[0].radius, config.detection_range);
        assert_eq!(spheres[1].color, OverlayColor::Red);
        assert_eq!(spheres[1].radius, config.stop_range);
        assert_eq!(spheres[2].color, OverlayColor::Gray);
        assert_eq!(spheres[2].center, Vec3::ZERO);
        assert_eq!(spheres[2].radius, config.patrol_radius);
    }
}
