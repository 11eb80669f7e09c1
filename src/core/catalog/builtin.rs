use crate::domain::{Lesson, LocalizedText, QuizQuestion};

fn options(pairs: [(&str, &str); 4]) -> Vec<LocalizedText> {
    pairs
        .into_iter()
        .map(|(en, te)| LocalizedText::new(en, te))
        .collect()
}

fn same_options(labels: [&str; 4]) -> Vec<LocalizedText> {
    labels.into_iter().map(LocalizedText::same).collect()
}

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![budgeting(), saving(), credit()]
}

fn budgeting() -> Lesson {
    Lesson::new(
        "1",
        LocalizedText::new("How to Budget", "బడ్జెట్ ఎలా చేయాలి"),
        LocalizedText::new(
            "A budget is a plan for your money. The 50/30/20 rule is simple:\n\n\
             • 50% for Needs (rent, food, bills)\n\
             • 30% for Wants (entertainment, shopping)\n\
             • 20% for Savings (emergency fund, goals)\n\n\
             Track your spending weekly to stay on track. Use apps or simple spreadsheets to monitor where your money goes.",
            "బడ్జెట్ అంటే మీ డబ్బు కోసం ప్లాన్. 50/30/20 నియమం సులభం:\n\n\
             • 50% అవసరాల కోసం (అద్దె, ఆహారం, బిల్లులు)\n\
             • 30% కోరికల కోసం (వినోదం, షాపింగ్)\n\
             • 20% పొదుపు కోసం (అత్యవసర నిధి, లక్ష్యాలు)\n\n\
             మీ ట్రాక్‌లో ఉండటానికి వారానికోసారి మీ ఖర్చును ట్రాక్ చేయండి. మీ డబ్బు ఎక్కడికి వెళుతుందో పర్యవేక్షించడానికి యాప్‌లు లేదా సాధారణ స్ప్రెడ్‌షీట్‌లను ఉపయోగించండి.",
        ),
        "📊",
        vec![
            QuizQuestion::new(
                LocalizedText::new(
                    "What percentage of income should go to savings according to the 50/30/20 rule?",
                    "50/30/20 నియమం ప్రకారం ఆదాయంలో ఎన్ని శాతం పొదుపుకు వెళ్లాలి?",
                ),
                same_options(["10%", "20%", "30%", "50%"]),
                1,
            ),
            QuizQuestion::new(
                LocalizedText::new(
                    "Which category takes the largest portion in the 50/30/20 rule?",
                    "50/30/20 నియమంలో అతిపెద్ద భాగాన్ని ఏ వర్గం తీసుకుంటుంది?",
                ),
                options([
                    ("Wants", "కోరికలు"),
                    ("Needs", "అవసరాలు"),
                    ("Savings", "పొదుపు"),
                    ("Investments", "పెట్టుబడులు"),
                ]),
                1,
            ),
            QuizQuestion::new(
                LocalizedText::new(
                    "How often should you track your spending?",
                    "మీ ఖర్చును ఎంత తరచుగా ట్రాక్ చేయాలి?",
                ),
                options([
                    ("Monthly", "నెలవారీ"),
                    ("Weekly", "వారానికోసారి"),
                    ("Yearly", "సంవత్సరానికోసారి"),
                    ("Never", "ఎప్పుడూ కాదు"),
                ]),
                1,
            ),
        ],
    )
}

fn saving() -> Lesson {
    Lesson::new(
        "2",
        LocalizedText::new("How to Save Money", "డబ్బు ఎలా ఆదా చేయాలి"),
        LocalizedText::new(
            "Saving money is easier when you automate it:\n\n\
             1. Pay yourself first - Transfer savings when you get paid\n\
             2. Set clear goals - Know what you're saving for\n\
             3. Cut unnecessary expenses - Review subscriptions monthly\n\
             4. Use the 24-hour rule - Wait before big purchases\n\n\
             Even small amounts add up. Start with ₹500/month and increase gradually.",
            "మీరు దానిని ఆటోమేట్ చేసినప్పుడు డబ్బు ఆదా చేయడం సులభం:\n\n\
             1. మొదట మీకు చెల్లించండి - మీకు జీతం వచ్చినప్పుడు పొదుపును బదిలీ చేయండి\n\
             2. స్పష్టమైన లక్ష్యాలను సెట్ చేయండి - మీరు దేని కోసం పొదుపు చేస్తున్నారో తెలుసుకోండి\n\
             3. అనవసర ఖర్చులను తగ్గించండి - సబ్‌స్క్రిప్షన్‌లను నెలవారీగా సమీక్షించండి\n\
             4. 24-గంటల నియమాన్ని ఉపయోగించండి - పెద్ద కొనుగోళ్ల ముందు వేచి ఉండండి\n\n\
             చిన్న మొత్తాలు కూడా పెరుగుతాయి. నెలకు ₹500తో ప్రారంభించి క్రమంగా పెంచండి.",
        ),
        "💰",
        vec![
            QuizQuestion::new(
                LocalizedText::new(
                    "What does \"pay yourself first\" mean?",
                    "\"మొదట మీకు చెల్లించండి\" అంటే ఏమిటి?",
                ),
                options([
                    ("Buy yourself gifts", "మీకు బహుమతులు కొనుగోలు చేయండి"),
                    (
                        "Save money before spending",
                        "ఖర్చు చేసే ముందు డబ్బు ఆదా చేయండి",
                    ),
                    ("Get a raise", "జీతం పెంపు పొందండి"),
                    ("Pay bills first", "మొదట బిల్లులు చెల్లించండి"),
                ]),
                1,
            ),
            QuizQuestion::new(
                LocalizedText::new("What is the 24-hour rule?", "24-గంటల నియమం ఏమిటి?"),
                options([
                    ("Sleep for 24 hours", "24 గంటలు నిద్రించండి"),
                    (
                        "Wait before making big purchases",
                        "పెద్ద కొనుగోళ్లు చేసే ముందు వేచి ఉండండి",
                    ),
                    ("Work 24 hours", "24 గంటలు పని చేయండి"),
                    ("Save for 24 days", "24 రోజులు పొదుపు చేయండి"),
                ]),
                1,
            ),
            QuizQuestion::new(
                LocalizedText::new(
                    "What is a good starting amount for monthly savings?",
                    "నెలవారీ పొదుపు కోసం మంచి ప్రారంభ మొత్తం ఎంత?",
                ),
                same_options(["₹10,000", "₹500", "₹50,000", "₹100"]),
                1,
            ),
        ],
    )
}

fn credit() -> Lesson {
    Lesson::new(
        "3",
        LocalizedText::new("Understanding Credit", "క్రెడిట్ అర్థం చేసుకోవడం"),
        LocalizedText::new(
            "Credit cards and loans can be useful tools when used wisely:\n\n\
             • Always pay on time to build good credit score\n\
             • Don't spend more than you can repay\n\
             • Keep credit utilization below 30%\n\
             • Read all terms and conditions\n\n\
             A good credit score (750+) helps you get better loan rates and financial opportunities.",
            "క్రెడిట్ కార్డ్‌లు మరియు రుణాలు తెలివిగా ఉపయోగించినప్పుడు ఉపయోగకరమైన సాధనాలు:\n\n\
             • మంచి క్రెడిట్ స్కోర్‌ను నిర్మించడానికి ఎల్లప్పుడూ సమయానికి చెల్లించండి\n\
             • మీరు తిరిగి చెల్లించగలిగే దానికంటే ఎక్కువ ఖర్చు చేయవద్దు\n\
             • క్రెడిట్ వినియోగాన్ని 30% కంటే తక్కువగా ఉంచండి\n\
             • అన్ని నిబంధనలు మరియు షరతులను చదవండి\n\n\
             మంచి క్రెడిట్ స్కోర్ (750+) మీకు మెరుగైన రుణ రేట్లు మరియు ఆర్థిక అవకాశాలను పొందడంలో సహాయపడుతుంది.",
        ),
        "💳",
        vec![
            QuizQuestion::new(
                LocalizedText::new("What is a good credit score?", "మంచి క్రెడిట్ స్కోర్ ఏమిటి?"),
                same_options(["300", "500", "750+", "1000"]),
                2,
            ),
            QuizQuestion::new(
                LocalizedText::new(
                    "What percentage of credit should you use?",
                    "మీరు ఎంత శాతం క్రెడిట్‌ను ఉపయోగించాలి?",
                ),
                options([
                    ("90%", "90%"),
                    ("Below 30%", "30% కంటే తక్కువ"),
                    ("100%", "100%"),
                    ("50%", "50%"),
                ]),
                1,
            ),
            QuizQuestion::new(
                LocalizedText::new(
                    "Why is paying on time important?",
                    "సమయానికి చెల్లించడం ఎందుకు ముఖ్యం?",
                ),
                options([
                    ("To avoid fees", "రుసుములను నివారించడానికి"),
                    ("To build credit score", "క్రెడిట్ స్కోర్‌ను నిర్మించడానికి"),
                    ("Both", "రెండూ"),
                    ("Neither", "ఏదీ కాదు"),
                ]),
                2,
            ),
        ],
    )
}
