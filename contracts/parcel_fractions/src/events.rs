use soroban_sdk::{symbol_short, Address, Env, Val};

pub fn transfer(e: &Env, from: &Address, to: &Address, parcel_id: u64, amount: i128) {
    e.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        (parcel_id, amount),
    );
}

pub fn mint(e: &Env, to: &Address, parcel_id: u64, amount: i128) {
    e.events()
        .publish((symbol_short!("mint"), to.clone()), (parcel_id, amount));
}

pub fn burn(e: &Env, from: &Address, parcel_id: u64, amount: i128) {
    e.events()
        .publish((symbol_short!("burn"), from.clone()), (parcel_id, amount));
}

pub fn proposal_created(e: &Env, id: u64, parcel_id: u64, proposer: &Address) {
    e.events().publish(
        (symbol_short!("prop_new"), id),
        (parcel_id, proposer.clone()),
    );
}

pub fn vote_cast(e: &Env, id: u64, voter: &Address, support: bool, weight: i128) {
    e.events()
        .publish((symbol_short!("vote"), id, voter.clone()), (support, weight));
}

pub fn proposal_executed(e: &Env, id: u64, result: Val) {
    e.events().publish((symbol_short!("prop_exec"), id), result);
}

pub fn proposal_rejected(e: &Env, id: u64) {
    e.events().publish((symbol_short!("prop_rej"), id), ());
}

pub fn rent_split(e: &Env, parcel_id: u64, amount: i128) {
    e.events()
        .publish((symbol_short!("rent_splt"), parcel_id), amount);
}

pub fn rent_withdrawn(e: &Env, parcel_id: u64, holder: &Address, amount: i128) {
    e.events().publish(
        (symbol_short!("rent_wdrw"), parcel_id, holder.clone()),
        amount,
    );
}

pub fn pool_withdrawn(e: &Env, owner: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("pool_wdrw"), owner.clone()), amount);
}
