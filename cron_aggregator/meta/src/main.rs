fn main() {
    multiversx_sc_meta_lib::cli_main::<cron_aggregator::AbiProvider>();
}
