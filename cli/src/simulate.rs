//! The end-to-end scenario against the in-process registry

use anyhow::Result;
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;
use swap_model::{PoolError, PoolInstruction, DECIMAL, LAMPORTS_PER_SOL};

use crate::{
    local::{LocalError, PoolRegistry, WalletBalance},
    tests::print_test_summary,
};

pub fn run_simulation(program_id: Pubkey, move_mint: Pubkey) -> Result<()> {
    println!("{}", "=== Running Local Simulation ===".bright_yellow().bold());
    println!("{}", "Same scenario as `test`, no cluster required\n".dimmed());

    let registry = PoolRegistry::new(program_id, move_mint);
    let user = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    registry.fund(&user, 3 * LAMPORTS_PER_SOL / 10, 10 * DECIMAL)?;
    let pool = registry.create_pool(&user)?.pool;

    let mut passed = 0;
    let mut failed = 0;
    let mut record = |name: &str, result: Result<()>| match result {
        Ok(_) => {
            println!("{} {}", "✓".bright_green(), name);
            passed += 1;
        }
        Err(e) => {
            println!("{} {}: {}", "✗".bright_red(), name, e);
            failed += 1;
        }
    };

    record("Pool is initialized", (|| {
        let state = registry.pool(&pool)?;
        check(!state.paused && state.sol_reserve() == 0 && state.move_token_reserve() == 0)
    })());

    record("Add liquidity with SOL", (|| {
        let amount = LAMPORTS_PER_SOL / 10;
        let state = registry.execute(&pool, &user, PoolInstruction::DepositNative { amount })?;
        check(state.sol_reserve() == amount)
    })());

    record("Add liquidity with MOVE", (|| {
        let state = registry.execute(&pool, &user, PoolInstruction::DepositSecondary { amount: DECIMAL })?;
        check(state.move_token_reserve() == DECIMAL)
    })());

    record("Swap MOVE to SOL", (|| {
        let before = registry.balance(&user)?;
        let state = registry.execute(&pool, &user, PoolInstruction::SwapSecondaryToNative { amount: DECIMAL })?;
        let after = registry.balance(&user)?;
        check(
            state.sol_reserve() == 0
                && state.move_token_reserve() == 2 * DECIMAL
                && after
                    == WalletBalance {
                        lamports: before.lamports + DECIMAL / 10,
                        move_tokens: before.move_tokens - DECIMAL,
                    },
        )
    })());

    record("Swap SOL to MOVE", (|| {
        let amount = LAMPORTS_PER_SOL / 10;
        let state = registry.execute(&pool, &user, PoolInstruction::SwapNativeToSecondary { amount })?;
        check(state.sol_reserve() == amount && state.move_token_reserve() == DECIMAL)
    })());

    record("Pause blocks swaps", (|| {
        registry.execute(&pool, &user, PoolInstruction::Pause)?;
        let rejected = registry.execute(&pool, &user, PoolInstruction::SwapNativeToSecondary { amount: 1 });
        registry.execute(&pool, &user, PoolInstruction::Unpause)?;
        check(rejected == Err(LocalError::Rejected(PoolError::PoolPaused)))
    })());

    record("Only authority pauses", (|| {
        let rejected = registry.execute(&pool, &stranger, PoolInstruction::Pause);
        check(rejected == Err(LocalError::Rejected(PoolError::Unauthorized)) && !registry.pool(&pool)?.paused)
    })());

    let state = registry.pool(&pool)?;
    println!(
        "\n{} {} lamports / {} MOVE base units",
        "Final reserves:".bright_cyan(),
        state.sol_reserve(),
        state.move_token_reserve()
    );

    print_test_summary("Local Simulation", passed, failed)
}

fn check(condition: bool) -> Result<()> {
    if !condition {
        anyhow::bail!("unexpected pool or wallet state");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_passes() {
        run_simulation(Pubkey::new_unique(), Pubkey::new_unique()).unwrap();
    }
}
