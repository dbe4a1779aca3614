use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::MxscPath;

pub const SECONDS_PER_DAY: u64 = 86_400; // 24 * 60 * 60

/// Block timestamp every test starts from.
pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;

pub const INITIAL_VALUE: u64 = 1;

pub const CRON_AGGREGATOR_ADDRESS: TestSCAddress = TestSCAddress::new("cron-aggregator");
pub const CRON_AGGREGATOR_PATH: MxscPath = MxscPath::new("output/cron-aggregator.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const CONTRIBUTOR_ADDRESS_1: TestAddress = TestAddress::new("contributor1");
pub const CONTRIBUTOR_ADDRESS_2: TestAddress = TestAddress::new("contributor2");
pub const CONTRIBUTOR_ADDRESS_3: TestAddress = TestAddress::new("contributor3");
pub const CONTRIBUTOR_ADDRESS_4: TestAddress = TestAddress::new("contributor4");
pub const CONTRIBUTOR_ADDRESS_5: TestAddress = TestAddress::new("contributor5");

pub const CONTRIBUTORS: [TestAddress; 5] = [
    CONTRIBUTOR_ADDRESS_1,
    CONTRIBUTOR_ADDRESS_2,
    CONTRIBUTOR_ADDRESS_3,
    CONTRIBUTOR_ADDRESS_4,
    CONTRIBUTOR_ADDRESS_5,
];

pub const ERROR_ONLY_OWNER: &[u8] = b"Endpoint can only be called by owner";
pub const ERROR_PAUSED: &[u8] = b"Contract is paused";
