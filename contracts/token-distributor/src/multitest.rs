//! End-to-end runs against a real cw20-base token and the bank module.

use cosmwasm_std::{coins, Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppBuilder, Contract, ContractWrapper, Executor};

use crate::error::ContractError;
use crate::msg::{
    CapLeftResponse, CapReachedResponse, CapResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    RateResponse, RemainingTokensResponse, SaleStateResponse,
};

const DEPLOYER: &str = "deployer";
const TREASURY: &str = "treasury";
const USER: &str = "user";
const FRIEND: &str = "friend";
const DENOM: &str = "uaxm";

const UNIT: u128 = 1_000_000_000_000_000_000;
const SUPPLY: u128 = 1_000_000_000 * UNIT;

fn distributor_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

fn cw20_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    token: Addr,
    distributor: Addr,
}

impl Suite {
    /// Token with the whole supply in the treasury, a paused distributor
    /// (rate 100, transaction cap 1 unit, total cap 10 units), and a
    /// treasury allowance of `allowance` for the distributor.
    fn new(allowance: u128) -> Self {
        let mut app = AppBuilder::new().build(|router, _, storage| {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(USER), coins(100 * UNIT, DENOM))
                .unwrap();
        });

        let token_code = app.store_code(cw20_contract());
        let token = app
            .instantiate_contract(
                token_code,
                Addr::unchecked(DEPLOYER),
                &cw20_base::msg::InstantiateMsg {
                    name: "Zen Token".to_string(),
                    symbol: "ZEN".to_string(),
                    decimals: 18,
                    initial_balances: vec![Cw20Coin {
                        address: TREASURY.to_string(),
                        amount: Uint128::new(SUPPLY),
                    }],
                    mint: None,
                    marketing: None,
                },
                &[],
                "zen",
                None,
            )
            .unwrap();

        let distributor_code = app.store_code(distributor_contract());
        let distributor = app
            .instantiate_contract(
                distributor_code,
                Addr::unchecked(DEPLOYER),
                &InstantiateMsg {
                    rate: 100,
                    treasury: TREASURY.to_string(),
                    token_cw20: token.to_string(),
                    transaction_cap: Uint128::new(UNIT),
                    total_cap: Uint128::new(10 * UNIT),
                    admin: DEPLOYER.to_string(),
                    payment_denom: DENOM.to_string(),
                },
                &[],
                "distributor",
                None,
            )
            .unwrap();

        app.execute_contract(
            Addr::unchecked(TREASURY),
            token.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: distributor.to_string(),
                amount: Uint128::new(allowance),
                expires: None,
            },
            &[],
        )
        .unwrap();

        Suite {
            app,
            token,
            distributor,
        }
    }

    fn admin(&mut self, msg: ExecuteMsg) -> anyhow::Result<()> {
        self.app
            .execute_contract(Addr::unchecked(DEPLOYER), self.distributor.clone(), &msg, &[])
            .map(|_| ())
    }

    fn buy(&mut self, sender: &str, amount: u128, beneficiary: Option<&str>) -> anyhow::Result<()> {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.distributor.clone(),
                &ExecuteMsg::Buy {
                    beneficiary: beneficiary.map(str::to_string),
                },
                &coins(amount, DENOM),
            )
            .map(|_| ())
    }

    fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.distributor.to_string(), msg)
            .unwrap()
    }

    fn token_balance(&self, address: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.to_string(),
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    fn bank_balance(&self, address: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(address, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    fn cap_left(&self) -> Uint128 {
        self.query::<CapLeftResponse>(&QueryMsg::CapLeft {}).cap_left
    }

    fn total_raised(&self) -> Uint128 {
        self.query::<SaleStateResponse>(&QueryMsg::SaleState {}).total_raised
    }
}

fn contract_error(err: anyhow::Error) -> ContractError {
    err.downcast::<ContractError>().unwrap()
}

#[test]
fn initial_rate_and_cap() {
    let suite = Suite::new(10_000_000 * UNIT);

    assert_eq!(suite.query::<RateResponse>(&QueryMsg::Rate {}).rate, 100);
    assert_eq!(
        suite.query::<CapResponse>(&QueryMsg::Cap {}).cap,
        Uint128::new(10 * UNIT)
    );
}

#[test]
fn only_admin_can_set_round() {
    let mut suite = Suite::new(10_000_000 * UNIT);

    let err = suite
        .app
        .execute_contract(
            Addr::unchecked(USER),
            suite.distributor.clone(),
            &ExecuteMsg::SetRound {
                rate: 90,
                cap_increase: Uint128::new(200_000),
            },
            &[],
        )
        .unwrap_err();
    assert!(matches!(contract_error(err), ContractError::Unauthorized));
}

#[test]
fn set_round_raises_cap() {
    let mut suite = Suite::new(10_000_000 * UNIT);

    suite
        .admin(ExecuteMsg::SetRound {
            rate: 90,
            cap_increase: Uint128::new(UNIT),
        })
        .unwrap();

    assert_eq!(suite.query::<RateResponse>(&QueryMsg::Rate {}).rate, 90);
    assert_eq!(
        suite.query::<CapResponse>(&QueryMsg::Cap {}).cap,
        Uint128::new(11 * UNIT)
    );
}

#[test]
fn buying_while_paused_fails() {
    let mut suite = Suite::new(10_000_000 * UNIT);

    let err = suite.buy(USER, 100, None).unwrap_err();
    assert!(matches!(contract_error(err), ContractError::SalePaused));
    assert_eq!(suite.bank_balance(USER), 100 * UNIT);
}

#[test]
fn buying_above_transaction_cap_fails() {
    let mut suite = Suite::new(10_000_000 * UNIT);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    let err = suite.buy(USER, 10 * UNIT, None).unwrap_err();
    assert!(matches!(
        contract_error(err),
        ContractError::TransactionCapExceeded { .. }
    ));
}

#[test]
fn buy_delivers_tokens_and_forwards_payment() {
    let mut suite = Suite::new(10_000_000 * UNIT);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    suite.buy(USER, 100, None).unwrap();

    assert_eq!(suite.token_balance(USER), 10_000);
    assert_eq!(suite.token_balance(TREASURY), SUPPLY - 10_000);
    assert_eq!(suite.bank_balance(TREASURY), 100);
    assert_eq!(suite.bank_balance(USER), 100 * UNIT - 100);
    assert_eq!(suite.bank_balance(suite.distributor.as_str()), 0);
    assert_eq!(suite.total_raised(), Uint128::new(100));
}

#[test]
fn buy_for_beneficiary() {
    let mut suite = Suite::new(10_000_000 * UNIT);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    suite.buy(USER, 100, Some(FRIEND)).unwrap();

    assert_eq!(suite.token_balance(FRIEND), 10_000);
    assert_eq!(suite.token_balance(USER), 0);
}

#[test]
fn buy_consumes_allowance() {
    let mut suite = Suite::new(1_000_000);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    suite.buy(USER, 2_500, None).unwrap();

    let remaining: RemainingTokensResponse = suite.query(&QueryMsg::RemainingTokens {});
    assert_eq!(remaining.allowance, Uint128::new(750_000));
    assert_eq!(remaining.remaining, Uint128::new(750_000));
    assert_eq!(remaining.treasury_balance, Uint128::new(SUPPLY - 250_000));
}

#[test]
fn insufficient_allowance_rolls_back() {
    let mut suite = Suite::new(9_999);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    let err = suite.buy(USER, 100, None).unwrap_err();
    assert!(matches!(
        contract_error(err),
        ContractError::SettlementFailure { .. }
    ));

    assert_eq!(suite.total_raised(), Uint128::zero());
    assert_eq!(suite.token_balance(USER), 0);
    assert_eq!(suite.bank_balance(USER), 100 * UNIT);
    assert_eq!(suite.bank_balance(TREASURY), 0);
}

#[test]
fn cap_reached_by_single_buyer() {
    let mut suite = Suite::new(10_000_000 * UNIT);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    let cap_left = suite.cap_left();
    suite
        .admin(ExecuteMsg::SetTransactionCap { cap: cap_left })
        .unwrap();
    suite.buy(USER, cap_left.u128(), None).unwrap();

    let reached: CapReachedResponse = suite.query(&QueryMsg::CapReached {});
    assert!(reached.cap_reached);
    assert_eq!(suite.token_balance(USER), cap_left.u128() * 100);
    assert_eq!(suite.bank_balance(TREASURY), 10 * UNIT);
}

#[test]
fn buying_after_cap_reached_fails() {
    let mut suite = Suite::new(10_000_000 * UNIT);
    suite.admin(ExecuteMsg::SetActivity { active: true }).unwrap();

    let cap_left = suite.cap_left();
    suite
        .admin(ExecuteMsg::SetTransactionCap { cap: cap_left })
        .unwrap();
    suite.buy(USER, cap_left.u128(), None).unwrap();

    let err = suite.buy(USER, 1, None).unwrap_err();
    assert!(matches!(
        contract_error(err),
        ContractError::TotalCapExceeded { .. }
    ));
    assert_eq!(suite.total_raised(), Uint128::new(10 * UNIT));
}
