//! Buying, selling and forced inventory grants.

use crate::engine::Engine;

impl Engine<'_> {
    pub fn buy_goods(&mut self, goods_id: i64, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let Some(index) = self.state.goods.iter().position(|g| g.id == goods_id) else {
            log::error!("buy: unknown goods id {goods_id}");
            self.log.show("商品不存在！");
            return false;
        };
        let price = self.state.goods[index].price;
        let name = self.state.goods[index].name.clone();
        if price <= 0 {
            self.log.show("该商品暂无价格，无法购买！");
            return false;
        }
        let total_cost = price * quantity;
        if self.state.cash < total_cost {
            self.log.show("现金不足，无法购买！");
            return false;
        }
        if quantity > self.state.available_space() {
            self.log.show("仓库容量不足，无法购买！");
            return false;
        }

        self.state.cash -= total_cost;
        self.state.goods[index].owned += quantity;
        self.state.total_goods += quantity;
        self.log
            .show(format!("成功购买{quantity}件{name}，花费{total_cost}元！"));
        true
    }

    pub fn sell_goods(&mut self, goods_id: i64, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let Some(index) = self.state.goods.iter().position(|g| g.id == goods_id) else {
            log::error!("sell: unknown goods id {goods_id}");
            self.log.show("商品不存在！");
            return false;
        };
        if self.state.goods[index].owned < quantity {
            self.log.show("没有足够的商品出售！");
            return false;
        }
        let name = self.state.goods[index].name.clone();
        let revenue = self.state.goods[index].price * quantity;

        self.state.goods[index].owned -= quantity;
        self.state.cash += revenue;
        self.state.total_goods -= quantity;
        self.log
            .show(format!("成功出售{quantity}件{name}，获得{revenue}元！"));

        // Selling contraband costs reputation.
        if let Some((_, def)) = self.catalog.goods_def(goods_id) {
            if def.fame_penalty > 0 {
                let loss = def.fame_penalty * quantity as i32;
                self.state.add_fame(-loss);
                self.log
                    .show(format!("出售{name}，危害社会，名声下降{loss}点！"));
            }
        }
        true
    }

    /// Force up to `quantity` units into inventory, truncating at remaining
    /// effective capacity. Returns the number actually added.
    pub(crate) fn add_goods(&mut self, goods_id: i64, quantity: i64) -> i64 {
        let Some(index) = self.state.ensure_goods(self.catalog, goods_id) else {
            log::error!("add_goods: unknown goods id {goods_id}");
            return 0;
        };
        let add = quantity.min(self.state.available_space()).max(0);
        if add == 0 {
            return 0;
        }
        self.state.goods[index].owned += add;
        self.state.total_goods += add;
        add
    }
}
