//! Debt, savings and the bank.

use crate::engine::Engine;

impl Engine<'_> {
    /// Weekly compounding, floored. No-op at zero balance.
    pub fn process_interest(&mut self) {
        let financial = &self.config.financial;
        if self.state.debt > 0 {
            self.state.debt += (self.state.debt as f64 * financial.debt_interest_rate) as i64;
        }
        if self.state.bank_savings > 0 {
            self.state.bank_savings +=
                (self.state.bank_savings as f64 * financial.bank_interest_rate) as i64;
        }
    }

    pub fn bank_deposit(&mut self, amount: i64) -> bool {
        if amount <= 0 {
            self.log.show("请输入有效的存款金额！");
            return false;
        }
        if self.state.cash < amount {
            self.log
                .show(format!("现金不足！当前现金：{}元", self.state.cash));
            return false;
        }
        self.state.cash -= amount;
        self.state.bank_savings += amount;
        true
    }

    pub fn bank_withdraw(&mut self, amount: i64) -> bool {
        if amount <= 0 {
            self.log.show("请输入有效的取款金额！");
            return false;
        }
        if self.state.bank_savings < amount {
            self.log.show("银行存款不足！");
            return false;
        }
        self.state.bank_savings -= amount;
        self.state.cash += amount;
        true
    }

    /// Repays at most the outstanding debt.
    pub fn repay_debt(&mut self, amount: i64) -> bool {
        if amount <= 0 {
            self.log.show("请输入有效的还款金额！");
            return false;
        }
        if self.state.cash < amount {
            self.log.show("现金不足！");
            return false;
        }
        let actual = amount.min(self.state.debt);
        self.state.cash -= actual;
        self.state.debt -= actual;
        self.log.show(format!("成功偿还{actual}元债务！"));
        true
    }

    /// Over the ceiling the creditors send someone around.
    pub fn check_debt_limit(&mut self) -> bool {
        let financial = &self.config.financial;
        if self.state.debt <= financial.max_debt_limit {
            return false;
        }
        let penalty = financial.debt_penalty_health;
        self.log.show(format!(
            "你欠钱太多，讨债公司派了一群人来打你一顿！健康-{penalty}"
        ));
        self.state.health = (self.state.health - penalty).max(0);
        if self.state.health == 0 {
            self.check_game_over();
        }
        true
    }

    /// Rare savings raid: a 1-in-25 roll on a 1000-range draw, loss scaled
    /// to the balance tier, sometimes foiled outright on large balances.
    pub fn check_bank_hacking(&mut self, enabled: bool) -> bool {
        if !enabled || self.state.bank_savings < 1000 {
            return false;
        }
        if self.rng.num(1000) % 25 != 0 {
            return false;
        }

        let loss;
        if self.state.bank_savings > 100_000 {
            let divisor = 2 + self.rng.num(20);
            loss = self.state.bank_savings / divisor;
            if self.rng.num(20) % 3 == 0 {
                self.log
                    .show("银行黑客攻击了你的账户，但被警察抓住了！你的存款安全。");
                return true;
            }
        } else {
            let divisor = 2 + self.rng.num(10);
            loss = self.state.bank_savings / divisor;
        }

        self.state.bank_savings = (self.state.bank_savings - loss).max(0);
        self.log.show(format!(
            "银行黑客攻击了你的账户！你的存款减少了{}元，剩余{}元",
            loss, self.state.bank_savings
        ));
        true
    }
}
