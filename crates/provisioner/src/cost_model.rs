use deployer_trait::ConstructorArg;
use network_config::{ConfigError, U256, units};

/// 0.25 LINK, the premium charged per request on the real coordinator.
pub const BASE_FEE: U256 = U256::from_limbs([250_000_000_000_000_000, 0, 0, 0]);

/// LINK (in juels) charged per unit of callback gas.
pub const GAS_PRICE_LINK: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

/// Constructor parameters of the mock coordinator. They are forwarded to the
/// deployment as-is and never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedOracleCostModel {
    pub base_fee: U256,
    pub gas_price_link: U256,
}

impl Default for SimulatedOracleCostModel {
    fn default() -> Self {
        Self {
            base_fee: BASE_FEE,
            gas_price_link: GAS_PRICE_LINK,
        }
    }
}

impl SimulatedOracleCostModel {
    /// `base_fee` is given in LINK, e.g. `"0.25"`.
    pub fn from_decimal(base_fee: &str, gas_price_link: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            base_fee: units::parse_ether(base_fee)?,
            gas_price_link: U256::from(gas_price_link),
        })
    }

    pub fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Uint(self.base_fee),
            ConstructorArg::Uint(self.gas_price_link),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_decimal_form() {
        let parsed = SimulatedOracleCostModel::from_decimal("0.25", 1_000_000_000).unwrap();
        assert_eq!(parsed, SimulatedOracleCostModel::default());
        assert_eq!(
            SimulatedOracleCostModel::default().base_fee,
            U256::from(250_000_000_000_000_000u64)
        );
    }

    #[test]
    fn base_fee_comes_first() {
        let args = SimulatedOracleCostModel::default().constructor_args();
        assert_eq!(
            args,
            vec![
                ConstructorArg::Uint(U256::from(250_000_000_000_000_000u64)),
                ConstructorArg::Uint(U256::from(1_000_000_000u64)),
            ]
        );
    }

    #[test]
    fn base_fee_formats_back_to_link() {
        assert_eq!(units::format_ether(BASE_FEE), "0.25");
    }
}
