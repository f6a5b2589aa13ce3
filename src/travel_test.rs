#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::config::GameConfig;
    use crate::engine::Engine;
    use crate::rng::GameRng;
    use crate::travel::TravelMode;

    fn engine(catalog: &Catalog, seed: u64) -> Engine<'_> {
        Engine::new(catalog, GameConfig::default(), "shanghai", GameRng::seeded(seed)).unwrap()
    }

    #[test]
    fn train_travel_charges_fare_and_lands_at_the_station() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 2000;

        assert!(engine.switch_city("beijing", TravelMode::Train));

        assert_eq!(engine.state.current_city, "beijing");
        assert_eq!(engine.state.cash, 2000 - 450);
        // 北京站 is location 0 and flagged as the train station.
        assert_eq!(engine.state.current_location, 0);
        assert_eq!(engine.state.city_visits_this_week, vec!["beijing".to_string()]);
    }

    #[test]
    fn same_city_travel_is_rejected() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 2000;

        assert!(!engine.switch_city("shanghai", TravelMode::Train));
        assert_eq!(engine.state.cash, 2000);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        assert!(!engine.switch_city("atlantis", TravelMode::Train));
    }

    #[test]
    fn travel_fails_without_fare_money() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 100;

        assert!(!engine.switch_city("beijing", TravelMode::Train));
        assert_eq!(engine.state.current_city, "shanghai");
        assert_eq!(engine.state.cash, 100);
    }

    #[test]
    fn weekly_cap_blocks_a_third_new_city() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 10_000;

        assert!(engine.switch_city("beijing", TravelMode::Train));
        assert!(engine.switch_city("guangzhou", TravelMode::Train));
        // Third fresh city this week: rejected.
        assert!(!engine.switch_city("suzhou", TravelMode::Train));
        // Already-visited cities stay reachable.
        assert!(engine.switch_city("beijing", TravelMode::Train));
    }

    #[test]
    fn tunnel_uses_subway_fare_and_the_far_end_station() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 2000;

        assert!(engine.switch_city("suzhou", TravelMode::Tunnel));

        // Shanghai subway is 4 yuan, tunnel fare is three times that.
        assert_eq!(engine.state.cash, 2000 - 12);
        assert_eq!(engine.state.current_city, "suzhou");
        // Arrives at 苏州 花桥站 (location 8), the tunnel's far end.
        assert_eq!(engine.state.current_location, 8);
    }

    #[test]
    fn tunnel_requires_an_actual_tunnel() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 2000;

        // Beijing has no tunnel anywhere.
        assert!(engine.switch_city("beijing", TravelMode::Train));
        assert!(!engine.switch_city("suzhou", TravelMode::Tunnel));
    }

    #[test]
    fn no_flights_from_a_city_without_routes() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 10_000;

        assert!(engine.switch_city("suzhou", TravelMode::Train));
        assert!(!engine.switch_city("beijing", TravelMode::Plane));
        assert_eq!(engine.state.current_city, "suzhou");
    }

    #[test]
    fn transit_luggage_loss_eventually_strikes_and_wipes_everything() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 11);
        engine.state.cash = 10_000_000;
        let goods_id = catalog.city("shanghai").unwrap().goods_id(0);
        assert!(engine.add_goods(goods_id, 10) == 10);

        let mut lost = false;
        for _ in 0..200 {
            engine.state.city_visits_this_week.clear();
            engine.switch_city("beijing", TravelMode::Plane);
            engine.switch_city("shanghai", TravelMode::Plane);
            if engine.state.total_goods == 0 {
                lost = true;
                break;
            }
        }
        assert!(lost, "a 12% transit risk must land within 400 flights");
        assert!(engine.state.goods.iter().all(|g| g.owned == 0));
    }

    #[test]
    fn subway_moves_within_the_city() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 100;

        // 南京路 is location 2 in Shanghai.
        assert!(engine.move_to_location(2));
        assert_eq!(engine.state.current_location, 2);
        assert_eq!(engine.state.cash, 96);

        assert!(!engine.move_to_location(2));
        assert!(!engine.move_to_location(999));
    }

    #[test]
    fn subway_fails_when_broke() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 2);
        engine.state.cash = 1;

        assert!(!engine.move_to_location(2));
        assert_eq!(engine.state.current_location, 0);
    }
}
