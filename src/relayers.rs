multiversx_sc::imports!();

use crate::errors::*;

#[multiversx_sc::module]
pub trait RelayersModule {
    #[only_owner]
    #[endpoint(registerRelayer)]
    fn register_relayer(&self, relayer: ManagedAddress) {
        require!(self.relayers().insert(relayer.clone()), ERR_RELAYER_ALREADY_REGISTERED);
        self.relayer_registered_event(&relayer);
    }

    /// Past action records and unclaimed pool rewards of the relayer stay
    /// untouched.
    #[only_owner]
    #[endpoint(unregisterRelayer)]
    fn unregister_relayer(&self, relayer: ManagedAddress) {
        require!(self.relayers().swap_remove(&relayer), ERR_RELAYER_NOT_REGISTERED);
        self.relayer_unregistered_event(&relayer);
    }

    #[view(isRelayer)]
    fn is_relayer(&self, address: &ManagedAddress) -> bool {
        self.relayers().contains(address)
    }

    #[view(getRelayers)]
    fn get_relayers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for relayer in self.relayers().iter() {
            result.push(relayer);
        }
        result
    }

    #[event("relayerRegistered")]
    fn relayer_registered_event(&self, #[indexed] relayer: &ManagedAddress);

    #[event("relayerUnregistered")]
    fn relayer_unregistered_event(&self, #[indexed] relayer: &ManagedAddress);

    #[storage_mapper("relayers")]
    fn relayers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
