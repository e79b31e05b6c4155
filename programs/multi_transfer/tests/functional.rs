#![cfg(feature = "test-sbf")]

#[path = "../../transfer_counter/tests/setup.rs"]
mod setup;

use {
    multi_transfer::{
        error::MultiTransferError, multi_transfers_instruction, TransferWallets,
        MULTI_TRANSFER_COMPUTE_UNIT_LIMIT,
    },
    setup::*,
    solana_program_test::*,
    solana_sdk::{
        compute_budget::ComputeBudgetInstruction, instruction::InstructionError, pubkey::Pubkey,
        signature::Keypair, signer::Signer, transaction::TransactionError,
    },
    test_case::test_case,
    transfer_counter::{Direction, WalletCounter},
};

const SENDER_BALANCE: u64 = 100 * ONE_TOKEN;

fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::default();
    program_test.add_program("transfer_counter", transfer_counter::ID, None);
    program_test.add_program("multi_transfer", multi_transfer::ID, None);
    add_token_2022(&mut program_test);
    program_test
}

struct Fixture {
    context: ProgramTestContext,
    mint: Pubkey,
    sender: Keypair,
    source: Pubkey,
    recipients: [Pubkey; 2],
    destinations: [Pubkey; 2],
}

// Hooked mint, a funded sender and two empty recipient accounts. Only the
// first `registered` recipients get wallet counters.
async fn fixture(registered: usize) -> Fixture {
    let mut context = program_test().start_with_context().await;
    let mint = Pubkey::new_unique();
    let sender = Keypair::new();
    let source = Pubkey::new_unique();
    let recipients = [Pubkey::new_unique(), Pubkey::new_unique()];
    let destinations = [Pubkey::new_unique(), Pubkey::new_unique()];

    setup_mint(&mut context, &mint, SENDER_BALANCE);
    setup_token_account(
        &mut context,
        &source,
        &sender.pubkey(),
        &mint,
        SENDER_BALANCE,
    );
    for (destination, recipient) in destinations.iter().zip(&recipients) {
        setup_token_account(&mut context, destination, recipient, &mint, 0);
    }
    enable_hook(&mut context, &mint).await;
    register_wallet(&mut context, &mint, &sender.pubkey()).await;
    for recipient in &recipients[..registered] {
        register_wallet(&mut context, &mint, recipient).await;
    }

    Fixture {
        context,
        mint,
        sender,
        source,
        recipients,
        destinations,
    }
}

async fn multi_transfer(
    fixture: &mut Fixture,
    amount1: u64,
    amount2: u64,
) -> Result<(), BanksClientError> {
    let instruction = multi_transfers_instruction(
        fixture.mint,
        fixture.source,
        fixture.destinations[0],
        fixture.destinations[1],
        fixture.sender.pubkey(),
        &TransferWallets {
            source: fixture.sender.pubkey(),
            destination_1: fixture.recipients[0],
            destination_2: fixture.recipients[1],
        },
        amount1,
        amount2,
    );
    let compute_budget =
        ComputeBudgetInstruction::set_compute_unit_limit(MULTI_TRANSFER_COMPUTE_UNIT_LIMIT);
    process(
        &mut fixture.context,
        &[compute_budget, instruction],
        &[&fixture.sender],
    )
    .await
}

// Balances of source and both destinations, then mint, sender and recipient volumes
async fn snapshot(fixture: &mut Fixture) -> (Vec<u64>, Vec<u128>) {
    let Fixture {
        context,
        mint,
        sender,
        source,
        recipients,
        destinations,
    } = fixture;
    let mut balances = vec![token_balance(context, source).await];
    for destination in destinations.iter() {
        balances.push(token_balance(context, destination).await);
    }
    let mut volumes = vec![
        mint_tally(context, mint, Direction::In).await.volume,
        mint_tally(context, mint, Direction::Out).await.volume,
        wallet_tally(context, mint, &sender.pubkey(), Direction::Out).await.volume,
    ];
    for recipient in recipients.iter() {
        let counter = WalletCounter::derive_pda(*mint, *recipient, Direction::In).0;
        if let Ok(Some(_)) = context.banks_client.get_account(counter).await {
            volumes.push(wallet_tally(context, mint, recipient, Direction::In).await.volume);
        }
    }
    (balances, volumes)
}

#[tokio::test]
async fn test_multi_transfer_updates_both_legs() {
    let mut fixture = fixture(2).await;

    multi_transfer(&mut fixture, ONE_TOKEN, 2 * ONE_TOKEN).await.unwrap();

    let Fixture {
        context,
        mint,
        sender,
        recipients,
        destinations,
        ..
    } = &mut fixture;
    assert_eq!(token_balance(context, &destinations[0]).await, ONE_TOKEN);
    assert_eq!(token_balance(context, &destinations[1]).await, 2 * ONE_TOKEN);

    let mint_out = mint_tally(context, mint, Direction::Out).await;
    assert_eq!(mint_out.volume, 3 * ONE_TOKEN as u128);
    assert_eq!(mint_out.transfers, 2);
    assert_eq!(mint_tally(context, mint, Direction::In).await.volume, 3 * ONE_TOKEN as u128);

    let sender_out = wallet_tally(context, mint, &sender.pubkey(), Direction::Out).await;
    assert_eq!(sender_out.volume, 3 * ONE_TOKEN as u128);
    let first_in = wallet_tally(context, mint, &recipients[0], Direction::In).await;
    let second_in = wallet_tally(context, mint, &recipients[1], Direction::In).await;
    assert_eq!(first_in.volume, ONE_TOKEN as u128);
    assert_eq!(second_in.volume, 2 * ONE_TOKEN as u128);
}

#[tokio::test]
async fn test_multi_transfer_accumulates_over_plain_transfer() {
    let mut fixture = fixture(2).await;
    let instruction = transfer_with_extra_metas_instruction(
        &mut fixture.context,
        &fixture.source,
        &fixture.mint,
        &fixture.destinations[0],
        &fixture.sender.pubkey(),
        ONE_TOKEN,
    )
    .await;
    process(&mut fixture.context, &[instruction], &[&fixture.sender])
        .await
        .unwrap();

    multi_transfer(&mut fixture, ONE_TOKEN, 2 * ONE_TOKEN).await.unwrap();

    let mint_out = mint_tally(&mut fixture.context, &fixture.mint, Direction::Out).await;
    assert_eq!(mint_out.volume, 4 * ONE_TOKEN as u128);
    assert_eq!(mint_out.transfers, 3);
    assert_eq!(
        token_balance(&mut fixture.context, &fixture.destinations[0]).await,
        2 * ONE_TOKEN
    );
}

// The second leg fails after the first one went through inside the same
// instruction; nothing of the first leg may survive.
#[test_case(2, 2 * SENDER_BALANCE ; "second leg over balance")]
#[test_case(1, 2 * ONE_TOKEN ; "second recipient unregistered")]
#[tokio::test]
async fn test_failed_second_leg_reverts_first(registered: usize, amount2: u64) {
    let mut fixture = fixture(registered).await;
    let before = snapshot(&mut fixture).await;

    assert!(multi_transfer(&mut fixture, ONE_TOKEN, amount2).await.is_err());

    assert_eq!(snapshot(&mut fixture).await, before);
    assert_eq!(before.0, vec![SENDER_BALANCE, 0, 0]);
}

#[test_case(0, ONE_TOKEN ; "first amount zero")]
#[test_case(ONE_TOKEN, 0 ; "second amount zero")]
#[tokio::test]
async fn test_zero_amount_is_rejected(amount1: u64, amount2: u64) {
    let mut fixture = fixture(2).await;

    let err = multi_transfer(&mut fixture, amount1, amount2)
        .await
        .unwrap_err()
        .unwrap();

    assert_eq!(
        err,
        TransactionError::InstructionError(
            1,
            InstructionError::Custom(MultiTransferError::AmountMustBeGreaterThanZero.into())
        )
    );
}
