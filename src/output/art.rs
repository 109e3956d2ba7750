//! Banners and gallows drawings

/// Gallows drawings from an untouched start to a full figure
pub const GALLOWS: [&str; 7] = [
    r"
     ╔═══════╗
     ║
     ║
     ║
     ║
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       😐
     ║
     ║
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       😯
     ║       │
     ║
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       😧
     ║      /│
     ║
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       😰
     ║      /│\
     ║
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       😩
     ║      /│\
     ║      /
     ║
    ═╩═══════",
    r"
     ╔═══════╗
     ║       │
     ║       💀
     ║      /│\
     ║      / \
     ║
    ═╩═══════",
];

pub const WELCOME_BANNER: &str = "\
🎯 ═══════════════════════════════════════════════════════════ 🎯
    🎪 WELCOME TO THE ULTIMATE HANGMAN CHALLENGE! 🎪
🎯 ═══════════════════════════════════════════════════════════ 🎯";

pub const DIFFICULTY_BANNER: &str = "\
🎮 ═══════════════════════════════════════════════════════════ 🎮
                    SELECT YOUR DIFFICULTY LEVEL
🎮 ═══════════════════════════════════════════════════════════ 🎮";

pub const LOSE_BANNER: &str = "\
💀 ════════════════════════════════════════ 💀
    😵 GAME OVER! YOU LOST! 😵
       Better luck next time!
💀 ════════════════════════════════════════ 💀";

pub const BEGINNER_WIN: &str = "\
🎉 ════════════════════════════════════════ 🎉
    🌟 CONGRATULATIONS BEGINNER! 🌟
    🏆 You've mastered the basics! 🏆
🎉 ════════════════════════════════════════ 🎉";

pub const INTERMEDIATE_WIN: &str = "\
🎉 ════════════════════════════════════════ 🎉
    🔥 AMAZING INTERMEDIATE PLAYER! 🔥
    🏆 You're getting really good! 🏆
🎉 ════════════════════════════════════════ 🎉";

pub const PROFESSIONAL_WIN: &str = "\
🎉 ════════════════════════════════════════ 🎉
    👑 LEGENDARY PROFESSIONAL! 👑
    🏆 YOU ARE A HANGMAN MASTER! 🏆
🎉 ════════════════════════════════════════ 🎉";

pub const HEART: &str = "💖";
pub const CORRECT: &str = "✅";
pub const INCORRECT: &str = "❌";
pub const REPEATED: &str = "🔄";
pub const TARGET: &str = "🎯";
pub const THINKING: &str = "🤔";
