//! Autoplay driver: runs a full game session with a simple greedy bot so
//! every engine path gets exercised end to end.

use city_trader::catalog::Catalog;
use city_trader::cli;
use city_trader::config::GameConfig;
use city_trader::engine::Engine;
use city_trader::rng::GameRng;
use city_trader::travel::TravelMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = cli::parse_args()?;

    let mut config = match &args.config_file {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(weeks) = args.weeks {
        config.time.total_weeks = weeks;
    }
    config.validate()?;

    let catalog = match &args.catalog_file {
        Some(path) => Catalog::from_yaml_file(path)?,
        None => Catalog::builtin(),
    };

    let rng = match args.seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::from_entropy(),
    };

    let mut engine = Engine::new(&catalog, config, &args.city, rng)?;
    if !args.quiet {
        let city = catalog.city(&args.city).map(|c| c.name.as_str()).unwrap_or("?");
        println!(
            "开局：{}，现金{}元，债务{}元，共{}周",
            city, engine.state.cash, engine.state.debt, engine.config.time.total_weeks
        );
    }

    // Hard bound: hospitalization can consume extra weeks but never stalls.
    let max_ticks = engine.config.time.total_weeks * 2;
    for _ in 0..max_ticks {
        if engine.state.is_game_over {
            break;
        }
        play_week(&mut engine);
        engine.next_time();

        for entry in engine.log.drain_new() {
            if args.verbose {
                println!("[第{}周] {}", entry.week, entry.text);
            }
        }
    }

    if let Some(result) = &engine.state.game_result {
        println!(
            "\n游戏结束：共玩{}周，最终得分{}元",
            result.weeks_played, result.final_score
        );
        println!("评价：{}", result.evaluation);
        println!(
            "现金{}元，存款{}元，债务{}元，健康{}，名声{}",
            engine.state.cash,
            engine.state.bank_savings,
            engine.state.debt,
            engine.state.health,
            engine.state.fame
        );
    }

    if let Some(path) = &args.output_file {
        engine.log.save_to_file(&path.to_string_lossy())?;
        if !args.quiet {
            println!("消息日志已保存到 {}", path.display());
        }
    }

    Ok(())
}

/// One week of greedy play: stay healthy, stay fed, liquidate holdings,
/// restock the cheapest goods, and hop cities now and then.
fn play_week(engine: &mut Engine) {
    if engine.state.health < 60 {
        let points = (100 - engine.state.health).min(20);
        engine.hospital_treatment(points);
    }
    if engine.state.stamina < 30 {
        engine.eat_at_restaurant();
    }
    if engine.state.cash < 1000 {
        engine.do_work("construction");
        engine.do_work("construction");
    }
    if engine.state.is_game_over {
        return;
    }

    // Sell everything that has a price this week.
    let holdings: Vec<(i64, i64)> = engine
        .state
        .goods
        .iter()
        .filter(|g| g.owned > 0 && g.price > 0)
        .map(|g| (g.id, g.owned))
        .collect();
    for (id, owned) in holdings {
        engine.sell_goods(id, owned);
    }

    if engine.state.debt > 0 && engine.state.cash > 20_000 {
        let payment = (engine.state.cash - 10_000).min(engine.state.debt);
        engine.repay_debt(payment);
    }
    if engine.state.cash > 80_000 {
        engine.bank_deposit(engine.state.cash - 30_000);
    }

    // Restock: cheapest purchasable good, as many as fit.
    let pick = engine.market_info().and_then(|market| {
        market
            .available_goods
            .iter()
            .find(|info| info.can_buy)
            .map(|info| info.goods.id)
    });
    if let Some(goods_id) = pick {
        let quantity = engine
            .state
            .goods_by_id(goods_id)
            .map(|g| city_trader::market::max_purchase_quantity(&engine.state, g))
            .unwrap_or(0);
        if quantity > 0 {
            engine.buy_goods(goods_id, quantity);
        }
    }

    // See another city every few weeks.
    if engine.current_week() % 6 == 0 {
        let target = engine
            .catalog
            .cities
            .iter()
            .find(|c| c.key != engine.state.current_city)
            .map(|c| c.key.clone());
        if let Some(target) = target {
            engine.switch_city(&target, TravelMode::Train);
        }
    }
}
