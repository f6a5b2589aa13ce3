#[cfg(test)]
mod tests {
    use crate::catalog::{
        BuildingConfig, Catalog, CityConfig, EventPools, FareTable, GoodsDef, HospitalConfig,
        LocationDef, RentConfig, RestaurantConfig,
    };
    use crate::config::GameConfig;
    use crate::engine::Engine;
    use crate::events::{CommercialEvent, HealthEvent, MoneyEvent};
    use crate::rng::GameRng;
    use std::collections::BTreeMap;

    /// One-city catalog with controlled event pools. Goods id 0 never gets
    /// a price (zero band); goods id 1 always does.
    fn test_catalog(
        commercial: Vec<CommercialEvent>,
        health: Vec<HealthEvent>,
        money: Vec<MoneyEvent>,
    ) -> Catalog {
        Catalog {
            cities: vec![CityConfig {
                id: 0,
                key: "testville".to_string(),
                name: "测试城".to_string(),
                short_name: "测".to_string(),
                locations: vec![LocationDef {
                    id: 0,
                    name: "老街".to_string(),
                    has_market: true,
                    ..LocationDef::default()
                }],
                goods: vec![
                    GoodsDef {
                        name: "滞销货".to_string(),
                        base_price: 0,
                        price_range: 0,
                        fame_penalty: 0,
                    },
                    GoodsDef {
                        name: "热销货".to_string(),
                        base_price: 100,
                        price_range: 50,
                        fame_penalty: 0,
                    },
                ],
                buildings: BuildingConfig {
                    hospital: HospitalConfig {
                        cost_per_point: 100,
                        // Never triggers forced hospitalization in tests.
                        trigger_health: 0,
                    },
                    work_types: Vec::new(),
                    house_types: Vec::new(),
                    restaurant: RestaurantConfig {
                        cost_min: 10,
                        cost_max: 20,
                        stamina_min: 10,
                        stamina_max: 20,
                        poisoning_pct: 0,
                        poisoning_damage_min: 0,
                        poisoning_damage_max: 0,
                    },
                },
                events: EventPools { commercial, health, money },
                fares: FareTable {
                    train: BTreeMap::new(),
                    plane: BTreeMap::new(),
                    subway: 3,
                },
                rent: RentConfig { base_rent: 1000, hotel_daily_price: 100 },
            }],
        }
    }

    fn engine(catalog: &Catalog) -> Engine<'_> {
        // No weekly withholding: the lone priced good must stay priced for
        // the assertions below.
        let mut config = GameConfig::default();
        config.price.default_leave_out = 0;
        Engine::new(catalog, config, "testville", GameRng::seeded(7)).unwrap()
    }

    fn always(goods_id: i64) -> CommercialEvent {
        CommercialEvent {
            freq: 1,
            message: "市场风声".to_string(),
            goods_id,
            ..CommercialEvent::default()
        }
    }

    #[test]
    fn commercial_multiplier_scales_price() {
        let catalog = test_catalog(
            vec![CommercialEvent { price_multiplier: 2, ..always(1) }],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);
        let before = engine.state.goods_by_id(1).unwrap().price;
        assert!(before > 0);

        engine.process_commercial_events();

        assert_eq!(engine.state.goods_by_id(1).unwrap().price, before * 2);
        assert!(!engine.log.entries().is_empty());
    }

    #[test]
    fn commercial_divider_floors_price() {
        let catalog = test_catalog(
            vec![CommercialEvent { price_divider: 2, ..always(1) }],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);
        let before = engine.state.goods_by_id(1).unwrap().price;

        engine.process_commercial_events();

        assert_eq!(engine.state.goods_by_id(1).unwrap().price, before / 2);
    }

    #[test]
    fn commercial_skips_unpriced_goods_and_falls_back() {
        // The only eligible event targets the never-priced good, so it is
        // skipped; the winter-tagged event is invisible to the scan in week
        // 1 (spring) but the fallback ignores tags and applies it.
        let catalog = test_catalog(
            vec![
                CommercialEvent { price_multiplier: 2, ..always(0) },
                CommercialEvent {
                    price_multiplier: 3,
                    tags: vec!["winter".to_string()],
                    ..always(1)
                },
            ],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);
        let before = engine.state.goods_by_id(1).unwrap().price;

        engine.process_commercial_events();

        assert_eq!(engine.state.goods_by_id(0).unwrap().price, 0);
        assert_eq!(engine.state.goods_by_id(1).unwrap().price, before * 3);
    }

    #[test]
    fn pure_grant_fires_on_unpriced_goods() {
        let catalog = test_catalog(
            vec![CommercialEvent { goods_given: 5, ..always(0) }],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);

        engine.process_commercial_events();

        assert_eq!(engine.state.goods_by_id(0).unwrap().owned, 5);
        assert_eq!(engine.state.total_goods, 5);
    }

    #[test]
    fn grant_truncates_at_capacity() {
        let catalog = test_catalog(
            vec![CommercialEvent { goods_given: 50, ..always(0) }],
            Vec::new(),
            Vec::new(),
        );
        let mut config = GameConfig::default();
        config.initial.base_capacity = 20;
        let mut engine =
            Engine::new(&catalog, config, "testville", GameRng::seeded(7)).unwrap();

        engine.process_commercial_events();

        assert_eq!(engine.state.total_goods, 20);
    }

    #[test]
    fn paid_grant_shortfall_becomes_debt() {
        let catalog = test_catalog(
            vec![CommercialEvent { goods_given: 2, cost: 5000, ..always(0) }],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;
        let debt_before = engine.state.debt;

        engine.process_commercial_events();

        // 5000 charged against 2000 cash: cash drained, 3000 new debt,
        // plus the parting sting for the last pool entry.
        assert_eq!(engine.state.cash, 0);
        assert_eq!(
            engine.state.debt,
            debt_before + 3000 + engine.config.hazards.commercial_parting_debt
        );
        assert_eq!(engine.state.goods_by_id(0).unwrap().owned, 2);
    }

    #[test]
    fn last_grant_event_always_stings() {
        let catalog = test_catalog(
            vec![
                CommercialEvent { price_multiplier: 2, ..always(1) },
                CommercialEvent { goods_given: 1, ..always(0) },
            ],
            Vec::new(),
            Vec::new(),
        );
        let mut engine = engine(&catalog);
        let debt_before = engine.state.debt;

        engine.process_commercial_events();

        assert_eq!(
            engine.state.debt,
            debt_before + engine.config.hazards.commercial_parting_debt
        );
    }

    #[test]
    fn health_stops_on_first_firing_event() {
        let catalog = test_catalog(
            Vec::new(),
            vec![
                HealthEvent { freq: 1, message: "淋了场雨".to_string(), damage: 3, ..HealthEvent::default() },
                HealthEvent { freq: 1, message: "又摔了一跤".to_string(), damage: 5, ..HealthEvent::default() },
            ],
            Vec::new(),
        );
        let mut engine = engine(&catalog);

        engine.process_health_events();

        assert_eq!(engine.state.health, 97);
    }

    #[test]
    fn health_respects_season_tags() {
        // Week 1 is spring: the winter-only event is ineligible.
        let catalog = test_catalog(
            Vec::new(),
            vec![
                HealthEvent {
                    freq: 1,
                    message: "寒潮来袭".to_string(),
                    damage: 50,
                    tags: vec!["winter".to_string()],
                    ..HealthEvent::default()
                },
                HealthEvent { freq: 1, message: "花粉过敏".to_string(), damage: 2, ..HealthEvent::default() },
            ],
            Vec::new(),
        );
        let mut engine = engine(&catalog);

        engine.process_health_events();

        assert_eq!(engine.state.health, 98);
    }

    #[test]
    fn health_death_is_immediate() {
        let catalog = test_catalog(
            Vec::new(),
            vec![HealthEvent { freq: 1, message: "天降横祸".to_string(), damage: 200, ..HealthEvent::default() }],
            Vec::new(),
        );
        let mut engine = engine(&catalog);

        engine.process_health_events();

        assert_eq!(engine.state.health, 0);
        assert!(engine.state.is_game_over);
        assert!(engine.state.game_result.is_some());
    }

    #[test]
    fn money_percentage_expense_floors_at_zero() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "被宰了一刀".to_string(),
                cash_multiplier: 50,
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 1000);
    }

    #[test]
    fn money_negative_multiplier_pays_out() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "路边捡到钱包".to_string(),
                cash_multiplier: -10,
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 2200);
    }

    #[test]
    fn money_savings_event_leaves_cash_alone() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "银行出事了".to_string(),
                cash_multiplier: 50,
                targets_savings: true,
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;
        engine.state.bank_savings = 1000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 2000);
        assert_eq!(engine.state.bank_savings, 500);
    }

    #[test]
    fn money_wager_with_fixed_profit() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "稳赚的买卖".to_string(),
                cash_based: true,
                min_cash: 1000,
                max_cash: 100_000,
                profit_multiplier: Some(1.0),
                loss_multiplier: Some(0.5),
                is_profit: Some(true),
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 4000);
    }

    #[test]
    fn money_wager_skips_below_minimum_stake() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "大买卖".to_string(),
                cash_based: true,
                min_cash: 5000,
                max_cash: 100_000,
                profit_multiplier: Some(1.0),
                loss_multiplier: Some(0.5),
                is_profit: Some(true),
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 2000);
    }

    #[test]
    fn money_wager_loss_floors_at_zero() {
        let catalog = test_catalog(
            Vec::new(),
            Vec::new(),
            vec![MoneyEvent {
                freq: 1,
                message: "血本无归".to_string(),
                cash_based: true,
                min_cash: 1000,
                max_cash: 100_000,
                profit_multiplier: Some(1.0),
                loss_multiplier: Some(2.0),
                is_profit: Some(false),
                ..MoneyEvent::default()
            }],
        );
        let mut engine = engine(&catalog);
        engine.state.cash = 2000;

        engine.process_money_events();

        assert_eq!(engine.state.cash, 0);
    }
}
