pub mod account;
pub mod add_money_map;
pub mod login;
pub mod money_map;
pub mod money_maps;
