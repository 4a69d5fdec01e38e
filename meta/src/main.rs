fn main() {
    multiversx_sc_meta_lib::cli_main::<auto_voting_rewards::AbiProvider>();
}
