#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::config::GameConfig;
    use crate::engine::Engine;
    use crate::rng::GameRng;

    fn engine(catalog: &Catalog, seed: u64) -> Engine<'_> {
        Engine::new(catalog, GameConfig::default(), "shanghai", GameRng::seeded(seed)).unwrap()
    }

    #[test]
    fn hospital_heals_and_charges() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 1);
        engine.state.health = 50;
        engine.state.cash = 10_000;

        assert!(engine.hospital_treatment(10));

        // Shanghai charges 400 per point.
        assert_eq!(engine.state.health, 60);
        assert_eq!(engine.state.cash, 10_000 - 4000);
    }

    #[test]
    fn hospital_rejects_full_health_and_empty_pockets() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 1);

        assert!(!engine.hospital_treatment(5));

        engine.state.health = 50;
        engine.state.cash = 100;
        assert!(!engine.hospital_treatment(5));
        assert_eq!(engine.state.health, 50);
        assert_eq!(engine.state.cash, 100);
    }

    #[test]
    fn hospital_caps_at_one_hundred() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 1);
        engine.state.health = 95;
        engine.state.cash = 100_000;

        assert!(engine.hospital_treatment(20));
        assert_eq!(engine.state.health, 100);
    }

    #[test]
    fn work_pays_within_range_and_costs_stamina() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 3);
        engine.state.cash = 0;
        let stamina_before = engine.state.stamina;

        assert!(engine.do_work("intern"));

        // Shanghai intern: income 120-260, stamina 3-6. The incidental
        // money roll may shave a percentage off afterwards, but can never
        // zero it out or push it past the income ceiling.
        assert!(engine.state.cash > 0, "cash {}", engine.state.cash);
        assert!(engine.state.cash <= 260, "cash {}", engine.state.cash);
        let spent = stamina_before - engine.state.stamina;
        assert!((3..=6).contains(&spent), "stamina cost {spent}");
        assert_eq!(engine.state.work_visits.get("intern"), Some(&1));
    }

    #[test]
    fn work_requires_health_deposit_and_stamina() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 3);

        engine.state.health = 0;
        assert!(!engine.do_work("intern"));
        engine.state.health = 100;

        // Delivery wants a 15 yuan deposit.
        engine.state.cash = 0;
        assert!(!engine.do_work("delivery"));

        engine.state.cash = 1000;
        engine.state.stamina = 0;
        assert!(!engine.do_work("intern"));
    }

    #[test]
    fn work_daily_limit_is_enforced() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 3);
        engine.state.cash = 100_000;
        engine.state.stamina = 100;

        // Delivery is capped at 4 shifts a week.
        let mut done = 0;
        for _ in 0..4 {
            engine.state.stamina = 100;
            engine.state.health = 100;
            if engine.do_work("delivery") {
                done += 1;
            }
        }
        assert_eq!(done, 4);

        engine.state.stamina = 100;
        engine.state.health = 100;
        assert!(!engine.do_work("delivery"));
        assert_eq!(engine.state.work_visits.get("delivery"), Some(&4));
    }

    #[test]
    fn unknown_work_type_fails() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 3);
        assert!(!engine.do_work("astronaut"));
    }

    #[test]
    fn restaurant_feeds_and_charges() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 5);
        engine.state.stamina = 10;
        engine.state.cash = 1000;

        assert!(engine.eat_at_restaurant());

        assert!(engine.state.stamina > 10);
        assert!(engine.state.cash < 1000);
        // Shanghai meals cost at most 100.
        assert!(engine.state.cash >= 900);
    }

    #[test]
    fn restaurant_rejects_the_broke() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 5);
        engine.state.cash = 10;

        assert!(!engine.eat_at_restaurant());
        assert_eq!(engine.state.cash, 10);
    }

    #[test]
    fn restaurant_poisoning_eventually_strikes() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 5);
        let mut poisoned = false;
        for _ in 0..2000 {
            engine.state.cash = 10_000;
            engine.state.stamina = 0;
            engine.state.health = 100;
            engine.eat_at_restaurant();
            if engine.state.health < 100 {
                poisoned = true;
                assert!(engine.state.health >= 85, "damage within configured band");
                break;
            }
        }
        assert!(poisoned, "an 8% risk must land within 2000 meals");
    }

    #[test]
    fn rent_house_charges_deposit_and_adds_capacity() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 10_000;

        // Shanghai one-bedroom: 7500/month, +40 capacity, no discount at
        // this cash level.
        assert!(engine.rent_house("one-bedroom"));

        assert_eq!(engine.state.cash, 2500);
        assert_eq!(engine.state.max_capacity, engine.state.base_capacity + 40);
        assert!(engine.state.is_leased_in("shanghai"));
        assert_eq!(
            engine.state.rented_houses.get("shanghai").map(String::as_str),
            Some("one-bedroom")
        );
    }

    #[test]
    fn rent_house_discount_halves_deposit() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 60_000;

        // Cash over the 50 000 threshold halves the 7500 deposit.
        assert!(engine.rent_house("one-bedroom"));
        assert_eq!(engine.state.cash, 60_000 - 3750);
    }

    #[test]
    fn switching_houses_nets_out_the_old_deposit() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 10_000;
        assert!(engine.rent_house("studio")); // 4800 deposit, +20 capacity
        assert_eq!(engine.state.cash, 5200);

        // Upgrade: 7500 new deposit minus 4800 refund = 2700 net.
        assert!(engine.rent_house("one-bedroom"));
        assert_eq!(engine.state.cash, 2500);
        assert_eq!(engine.state.max_capacity, engine.state.base_capacity + 40);
        assert_eq!(engine.state.rented_cities.len(), 1);
    }

    #[test]
    fn renting_the_same_house_twice_fails() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 20_000;
        assert!(engine.rent_house("studio"));
        assert!(!engine.rent_house("studio"));
    }

    #[test]
    fn monthly_rent_is_paid_when_affordable() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 20_000;
        assert!(engine.rent_house("studio"));

        let cash_before = engine.state.cash;
        engine.process_monthly_rent();
        assert_eq!(engine.state.cash, cash_before - 4800);
        assert!(engine.state.is_leased_in("shanghai"));
    }

    #[test]
    fn eviction_seizes_cash_and_liquidates_overflow() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 10_000;
        assert!(engine.rent_house("one-bedroom"));

        // Fill well past the suitcase floor, then go broke.
        let goods_id = catalog.city("shanghai").unwrap().goods_id(0);
        let added = engine.add_goods(goods_id, 130);
        assert_eq!(added, 130);
        engine.state.cash = 0;

        engine.process_monthly_rent();

        assert_eq!(engine.state.cash, 0);
        assert!(!engine.state.is_leased_in("shanghai"));
        assert!(engine.state.rented_houses.get("shanghai").is_none());
        assert_eq!(engine.state.max_capacity, engine.state.base_capacity);
        assert!(engine.state.total_goods <= engine.state.base_capacity);
        let sum: i64 = engine.state.goods.iter().map(|g| g.owned).sum();
        assert_eq!(engine.state.total_goods, sum);
    }

    #[test]
    fn rent_drift_stays_bounded() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 20_000;
        assert!(engine.rent_house("studio"));

        for _ in 0..2000 {
            engine.process_rent_drift();
            let multiplier = engine.state.rent_multiplier("shanghai");
            assert!((0.5..=1.5).contains(&multiplier), "multiplier {multiplier}");
        }
        // With a 5% weekly chance, 2000 tries must have moved it.
        assert!((engine.state.rent_multiplier("shanghai") - 1.0).abs() > f64::EPSILON);
    }

    #[test]
    fn drifted_rent_scales_monthly_payment() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 20_000;
        assert!(engine.rent_house("studio"));
        engine.state.rent_multipliers.insert("shanghai".to_string(), 1.5);

        let cash_before = engine.state.cash;
        engine.process_monthly_rent();
        assert_eq!(engine.state.cash, cash_before - 7200); // 4800 * 1.5
    }

    #[test]
    fn accommodation_charges_hotel_when_unleased() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 10_000;

        engine.settle_accommodation();

        // Shanghai hotel: 450/day for a week.
        assert_eq!(engine.state.cash, 10_000 - 3150);
    }

    #[test]
    fn accommodation_homelessness_costs_health() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 100;

        engine.settle_accommodation();

        assert_eq!(engine.state.cash, 100);
        assert_eq!(engine.state.health, 85);
    }

    #[test]
    fn accommodation_free_when_leased() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.cash = 20_000;
        assert!(engine.rent_house("studio"));
        let cash_before = engine.state.cash;

        engine.settle_accommodation();

        assert_eq!(engine.state.cash, cash_before);
    }

    #[test]
    fn forced_hospitalization_consumes_time_and_charges_debt() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.health = 40;
        let time_before = engine.state.time_left;
        let debt_before = engine.state.debt;

        assert!(engine.check_forced_hospitalization());

        let consumed = time_before - engine.state.time_left;
        assert!((1..=2).contains(&consumed), "consumed {consumed}");
        assert_eq!(engine.state.health, 50);
        let charged = engine.state.debt - debt_before;
        assert!(charged >= 1000 * consumed as i64);
        assert!(charged <= 9500 * 2);
    }

    #[test]
    fn no_forced_hospitalization_in_final_weeks() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.health = 40;
        engine.state.time_left = 3;

        assert!(!engine.check_forced_hospitalization());
        assert_eq!(engine.state.time_left, 3);
    }

    #[test]
    fn healthy_player_is_not_hospitalized() {
        let catalog = Catalog::builtin();
        let mut engine = engine(&catalog, 8);
        engine.state.health = 100;

        assert!(!engine.check_forced_hospitalization());
    }
}
